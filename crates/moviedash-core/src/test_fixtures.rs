//! Shared in-memory dataset for unit tests.

use crate::dataset::Dataset;

/// Ten rows covering ties, missing box office, a null certificate and
/// repeated directors.
pub const SAMPLE_CSV: &str = "\
rank,name,year,rating,genre,certificate,run_time,tagline,budget,box_office,casts,directors,writers
1,The Shawshank Redemption,1994,9.3,Drama,R,2h 22m,Hope.,\"$25,000,000\",\"$28,884,504\",Tim Robbins,Frank Darabont,Stephen King
2,The Godfather,1972,9.2,\"Crime,Drama\",R,2h 55m,An offer.,6000000,250341816,Marlon Brando,Francis Ford Coppola,Mario Puzo
3,The Dark Knight,2008,9.0,\"Action,Crime,Drama\",PG-13,2h 32m,Why So Serious?,185000000,1006234167,Christian Bale,Christopher Nolan,Jonathan Nolan
4,The Godfather Part II,1974,9.0,\"Crime,Drama\",R,3h 22m,Destiny.,13000000,47961919,Al Pacino,Francis Ford Coppola,Mario Puzo
5,Inception,2010,8.8,\"Action,Adventure,Sci-Fi\",PG-13,2h 28m,Your mind.,160000000,836848102,Leonardo DiCaprio,Christopher Nolan,Christopher Nolan
6,The Green Mile,1999,8.6,\"Crime,Drama,Fantasy\",R,3h 9m,Miracles.,60000000,Not Available,Tom Hanks,Frank Darabont,Stephen King
7,Spirited Away,2001,8.6,\"Animation,Adventure,Family\",PG,2h 5m,The tunnel.,Unknown,358410212,Daveigh Chase,Hayao Miyazaki,Hayao Miyazaki
8,Interstellar,2014,8.7,\"Adventure,Drama,Sci-Fi\",PG-13,2h 49m,Mankind.,165000000,701729206,Matthew McConaughey,Christopher Nolan,Jonathan Nolan
9,Psycho,1960,8.5,\"Horror,Mystery,Thriller\",,1h 49m,The picture.,806947,32052925,Anthony Perkins,Alfred Hitchcock,Joseph Stefano
10,Fight Club,1999,8.8,Drama,R,2h 19m,Mischief.,63000000,,Brad Pitt,David Fincher,Chuck Palahniuk
";

/// Parses [`SAMPLE_CSV`].
pub fn sample_dataset() -> Dataset {
    Dataset::from_reader(SAMPLE_CSV.as_bytes()).expect("sample dataset parses")
}
