//! Seed datasets for the administrative bootstrap command.
//!
//! A dataset is plain data: people are referenced by full name and release
//! dates are poster-style strings. [`SeedDataset::validate`] resolves every
//! reference before anything touches the database, so a bad dataset fails
//! without a partial write.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::CoreError;
use crate::release::parse_release_date;

/// A director or actor to create, with an optional guild membership.
#[derive(Debug, Clone, Serialize)]
pub struct SeedPerson {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub guild: Option<&'static str>,
}

impl SeedPerson {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedMovie {
    pub title: &'static str,
    /// Poster-style release date, e.g. `"Oct 15 1981"`.
    pub released: &'static str,
    /// Full name of the director.
    pub director: &'static str,
    /// Full names of the cast.
    pub actors: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedDataset {
    pub directors: Vec<SeedPerson>,
    pub actors: Vec<SeedPerson>,
    pub movies: Vec<SeedMovie>,
}

/// Named datasets selectable from the admin CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetName {
    Development,
    Filmography,
}

impl DatasetName {
    pub fn dataset(self) -> SeedDataset {
        match self {
            Self::Development => SeedDataset::development(),
            Self::Filmography => SeedDataset::filmography(),
        }
    }
}

fn person(first_name: &'static str, last_name: &'static str) -> SeedPerson {
    SeedPerson {
        first_name,
        last_name,
        guild: None,
    }
}

fn guild_member(
    first_name: &'static str,
    last_name: &'static str,
    guild: &'static str,
) -> SeedPerson {
    SeedPerson {
        first_name,
        last_name,
        guild: Some(guild),
    }
}

const EVIL_DEAD_CAST: [&str; 5] = [
    "Bruce Campbell",
    "Ellen Sandweiss",
    "Hal Delrich",
    "Betsy Baker",
    "Sarah York",
];

impl SeedDataset {
    /// One director, one movie, five actors.
    pub fn development() -> Self {
        Self {
            directors: vec![guild_member("Sam", "Raimi", "Raimi DGA")],
            actors: vec![
                person("Bruce", "Campbell"),
                person("Ellen", "Sandweiss"),
                person("Hal", "Delrich"),
                person("Betsy", "Baker"),
                person("Sarah", "York"),
            ],
            movies: vec![SeedMovie {
                title: "Evil Dead",
                released: "Oct 15 1981",
                director: "Sam Raimi",
                actors: EVIL_DEAD_CAST.to_vec(),
            }],
        }
    }

    /// Five Sam Raimi movies, Bruce Campbell in every one of them.
    pub fn filmography() -> Self {
        Self {
            directors: vec![guild_member("Sam", "Raimi", "Raimi DGA")],
            actors: vec![
                guild_member("Bruce", "Campbell", "Campbell SAG"),
                person("Ellen", "Sandweiss"),
                person("Hal", "Delrich"),
                person("Betsy", "Baker"),
                person("Sarah", "York"),
                person("Reed", "Birney"),
                person("Sheree", "Wilson"),
                person("Sarah", "Berry"),
                person("Dan", "Hicks"),
                person("Embeth", "Davidtz"),
                person("Tobey", "Maguire"),
                person("Kirsten", "Dunst"),
            ],
            movies: vec![
                SeedMovie {
                    title: "Evil Dead",
                    released: "Oct 15 1981",
                    director: "Sam Raimi",
                    actors: EVIL_DEAD_CAST.to_vec(),
                },
                SeedMovie {
                    title: "Crimewave",
                    released: "Apr 05 1985",
                    director: "Sam Raimi",
                    actors: vec!["Bruce Campbell", "Reed Birney", "Sheree Wilson"],
                },
                SeedMovie {
                    title: "Evil Dead II",
                    released: "Mar 13 1987",
                    director: "Sam Raimi",
                    actors: vec!["Bruce Campbell", "Sarah Berry", "Dan Hicks"],
                },
                SeedMovie {
                    title: "Army of Darkness",
                    released: "Oct 09 1992",
                    director: "Sam Raimi",
                    actors: vec!["Bruce Campbell", "Embeth Davidtz"],
                },
                SeedMovie {
                    title: "Spider-Man 2",
                    released: "Jun 30 2004",
                    director: "Sam Raimi",
                    actors: vec!["Bruce Campbell", "Tobey Maguire", "Kirsten Dunst"],
                },
            ],
        }
    }

    /// Check that every reference resolves and every value parses.
    pub fn validate(&self) -> Result<(), CoreError> {
        let directors = unique_names("director", &self.directors)?;
        let actors = unique_names("actor", &self.actors)?;

        for movie in &self.movies {
            if movie.title.trim().is_empty() {
                return Err(CoreError::Validation("movie title must not be empty".into()));
            }
            parse_release_date(movie.released)?;
            if !directors.contains(movie.director) {
                return Err(CoreError::Validation(format!(
                    "movie '{}' references unknown director '{}'",
                    movie.title, movie.director
                )));
            }
            if let Some(actor) = movie.actors.iter().find(|a| !actors.contains(**a)) {
                return Err(CoreError::Validation(format!(
                    "movie '{}' references unknown actor '{actor}'",
                    movie.title
                )));
            }
        }
        Ok(())
    }
}

fn unique_names(role: &str, people: &[SeedPerson]) -> Result<HashSet<String>, CoreError> {
    let mut names = HashSet::with_capacity(people.len());
    for p in people {
        if !names.insert(p.full_name()) {
            return Err(CoreError::Validation(format!(
                "duplicate {role} '{}'",
                p.full_name()
            )));
        }
    }
    Ok(names)
}
