use refmodel_core::{identity, MovieList, MovieListSnapshot, User};

#[test]
fn shared_list_is_seen_by_both_users_once() {
    let paul = User::new();
    let simon = User::new();
    let surf_movies = MovieList::new("SurfMovies").unwrap();
    paul.add_list(&surf_movies);
    simon.add_list(&surf_movies);

    let through_paul = paul.list("SurfMovies").unwrap();
    assert!(through_paul.add_movie_to_list("Point Break").unwrap());
    assert!(!through_paul.add_movie_to_list("Point Break").unwrap());

    let through_simon = simon.list("SurfMovies").unwrap();
    assert!(identity(&through_paul, &through_simon));
    assert_eq!(through_simon.movies(), vec!["Point Break"]);
    assert_eq!(surf_movies.len(), 1);
}

#[test]
fn add_list_does_not_copy() {
    let paul = User::new();
    let list = MovieList::new("SurfMovies").unwrap();
    paul.add_list(&list);

    list.add_movie_to_list("Blue Crush").unwrap();
    assert!(paul.list("SurfMovies").unwrap().contains("Blue Crush"));
}

#[test]
fn unknown_list_is_none() {
    let paul = User::new();
    assert!(paul.list("SurfMovies").is_none());
    assert!(paul.list_names().is_empty());
}

#[test]
fn snapshot_is_sorted_and_detached() {
    let list = MovieList::new("SurfMovies").unwrap();
    list.add_movie_to_list("Point Break").unwrap();
    list.add_movie_to_list("Blue Crush").unwrap();

    let snapshot = list.snapshot();
    list.add_movie_to_list("Riding Giants").unwrap();

    assert_eq!(
        snapshot,
        MovieListSnapshot {
            list_name: "SurfMovies".to_string(),
            movies: vec!["Blue Crush".to_string(), "Point Break".to_string()],
        }
    );
    assert_eq!(list.len(), 3);
}
