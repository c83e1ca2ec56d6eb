use herald_core::AppError;
use serde::{Deserialize, Serialize};

/// A lesson as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: u64,
    pub title: String,
    pub duration_minutes: u32,
}

/// Read-only lesson list backing the reference routes
#[derive(Debug)]
pub struct Catalogue {
    lessons: Vec<Lesson>,
}

impl Catalogue {
    /// Catalogue holding `count` lessons named `lesson1`, `lesson2`, ...
    pub fn fixtures(count: u64) -> Self {
        let lessons = (1..=count)
            .map(|id| Lesson {
                id,
                title: format!("lesson{id}"),
                duration_minutes: 15,
            })
            .collect();

        Self { lessons }
    }

    /// Number of lessons
    pub fn total(&self) -> u64 {
        self.lessons.len() as u64
    }

    /// Look up a lesson by id
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::RecordNotFound`](herald_core::ErrorCode::RecordNotFound)
    /// if no lesson has this id
    pub fn get(&self, id: u64) -> Result<&Lesson, AppError> {
        self.lessons
            .iter()
            .find(|lesson| lesson.id == id)
            .ok_or_else(|| AppError::record_not_found(format!("lesson {id} not found")))
    }

    /// One page of lessons, 1-based
    ///
    /// Pages past the end are empty.
    pub fn page(&self, page: u64, page_size: u64) -> Vec<Lesson> {
        let skip = page.saturating_sub(1).saturating_mul(page_size);
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let take = usize::try_from(page_size).unwrap_or(usize::MAX);

        self.lessons.iter().skip(skip).take(take).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use herald_core::ErrorCode;

    use super::*;

    #[test]
    fn pages_are_one_based() {
        let catalogue = Catalogue::fixtures(25);

        let first: Vec<_> = catalogue.page(1, 10).into_iter().map(|l| l.id).collect();
        assert_eq!(first, (1..=10).collect::<Vec<_>>());

        let last: Vec<_> = catalogue.page(3, 10).into_iter().map(|l| l.id).collect();
        assert_eq!(last, (21..=25).collect::<Vec<_>>());

        assert!(catalogue.page(4, 10).is_empty());
        assert!(catalogue.page(u64::MAX, u64::MAX).is_empty());
    }

    #[test]
    fn missing_lesson_is_record_not_found() {
        let catalogue = Catalogue::fixtures(2);
        assert_eq!(catalogue.get(2).unwrap().title, "lesson2");

        let err = catalogue.get(3).unwrap_err();
        assert_eq!(err.code(), ErrorCode::RecordNotFound);
        assert_eq!(err.message(), "lesson 3 not found");
    }
}
