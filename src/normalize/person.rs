use crate::models::{MovieCredit, PersonDetails, PersonSummary, MAX_PERSON_CREDITS};
use crate::provider::{MovieCreditsRecord, PersonRecord};

use super::non_empty;

/// Crew jobs kept in a filmography; other crew roles are dropped.
pub const KEY_CREW_JOBS: [&str; 4] = ["Director", "Producer", "Writer", "Screenplay"];

/// How many upstream known-for entries are considered.
const KNOWN_FOR_ENTRIES: usize = 3;

/// "<department>" or "<department> (<work>, <work>, <work>)".
///
/// Only the first three known-for entries are looked at. A work contributes
/// its title, or its name when it has no title; entries with neither are skipped.
pub fn known_for(person: &PersonRecord) -> String {
    let works: Vec<&str> = person
        .known_for
        .iter()
        .take(KNOWN_FOR_ENTRIES)
        .filter_map(|work| {
            work.title
                .as_deref()
                .filter(|t| !t.is_empty())
                .or_else(|| work.name.as_deref().filter(|n| !n.is_empty()))
        })
        .collect();

    if works.is_empty() {
        person.known_for_department.clone()
    } else {
        format!("{} ({})", person.known_for_department, works.join(", "))
    }
}

pub fn person_summary(person: &PersonRecord) -> PersonSummary {
    PersonSummary {
        id: person.id,
        name: person.name.clone(),
        known_for: known_for(person),
        profile_path: non_empty(person.profile_path.clone()),
    }
}

/// Every cast credit, then key crew credits, each in provider order, truncated
/// to [`MAX_PERSON_CREDITS`].
pub fn movie_credits(credits: MovieCreditsRecord) -> Vec<MovieCredit> {
    let cast = credits.cast.into_iter().map(|c| MovieCredit {
        id: c.id,
        title: c.title,
        character: Some(c.character),
        job: None,
        release_date: non_empty(c.release_date),
    });
    let crew = credits
        .crew
        .into_iter()
        .filter(|c| KEY_CREW_JOBS.contains(&c.job.as_str()))
        .map(|c| MovieCredit {
            id: c.id,
            title: c.title,
            character: None,
            job: Some(c.job),
            release_date: non_empty(c.release_date),
        });

    cast.chain(crew).take(MAX_PERSON_CREDITS).collect()
}

pub fn person_details(person: PersonRecord, credits: MovieCreditsRecord) -> PersonDetails {
    PersonDetails {
        id: person.id,
        name: person.name,
        biography: person.biography,
        birthday: non_empty(person.birthday),
        deathday: non_empty(person.deathday),
        known_for_department: person.known_for_department,
        place_of_birth: non_empty(person.place_of_birth),
        profile_path: non_empty(person.profile_path),
        movies: movie_credits(credits),
    }
}
