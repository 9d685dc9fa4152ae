//! Seeding of the programs table.
//!
//! [`seed_programs`] only writes into an empty store: if any program already
//! exists the run is skipped. Storage is abstracted behind [`ProgramStore`] so
//! the seeding rule does not depend on a live database.

use log::info;

/// A program row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Program {
    pub title: &'static str,
    pub description: &'static str,
    pub cover_image: &'static str,
}

/// Programs inserted into an empty store.
pub const DEFAULT_PROGRAMS: [Program; 4] = [
    Program {
        title: "High School",
        description: "Ace your exams and navigate teen life with confidence.",
        cover_image: "book-open",
    },
    Program {
        title: "University",
        description: "Thrive in your degree, campus life, and beyond.",
        cover_image: "graduation-cap",
    },
    Program {
        title: "Gap Year",
        description: "Make the most of your time off to discover yourself.",
        cover_image: "user",
    },
    Program {
        title: "Personal Dev",
        description: "Grow in faith, character, leadership and life skills.",
        cover_image: "star",
    },
];

/// Storage the seeder reads from and writes into.
pub trait ProgramStore {
    type Error;

    /// Returns the number of stored programs.
    fn count(&mut self) -> Result<i64, Self::Error>;

    /// Stores one program.
    fn create(&mut self, program: &Program) -> Result<(), Self::Error>;
}

/// Result of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty; this many programs were inserted.
    Seeded(usize),
    /// The store already held this many programs; nothing was written.
    Skipped(i64),
}

/// Insert `programs` in order if `store` is currently empty.
///
/// # Errors
///
/// Returns the store's error as soon as a count or insert fails. Programs
/// inserted before the failure are not rolled back.
pub fn seed_programs<S: ProgramStore>(
    store: &mut S,
    programs: &[Program],
) -> Result<SeedOutcome, S::Error> {
    let count = store.count()?;
    info!(count; "Current program count");

    if count != 0 {
        info!("Programs already exist, skipping");
        return Ok(SeedOutcome::Skipped(count));
    }

    info!(programs = programs.len(); "Seeding programs");
    for program in programs {
        store.create(program)?;
        info!("Created: {}", program.title);
    }
    info!("Seeding complete");

    Ok(SeedOutcome::Seeded(programs.len()))
}
