//! Request payload validation: trim, non-empty title, allowed priority.

use crate::error::AppError;
use crate::model::{CreateTodo, NewTodo, TodoPatch, UpdateTodo};

/// Validate a create payload. Title and description are trimmed; a title
/// that is empty after trimming is rejected, as is an unknown priority.
pub fn validate_create(req: CreateTodo) -> Result<NewTodo, AppError> {
    Ok(NewTodo {
        title: validated_title(&req.title)?,
        description: req.description.as_deref().map(str::trim).unwrap_or("").to_string(),
        priority: req.priority.as_deref().map(str::parse).transpose()?.unwrap_or_default(),
    })
}

/// Validate a partial update. Only supplied fields are checked; a supplied
/// title must still be non-empty after trimming.
pub fn validate_update(req: UpdateTodo) -> Result<TodoPatch, AppError> {
    Ok(TodoPatch {
        title: req.title.as_deref().map(validated_title).transpose()?,
        description: req.description.as_deref().map(|d| d.trim().to_string()),
        completed: req.completed,
        priority: req.priority.as_deref().map(str::parse).transpose()?,
    })
}

fn validated_title(raw: &str) -> Result<String, AppError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title cannot be empty".into()));
    }
    Ok(title.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    #[test]
    fn create_defaults_description_and_priority() {
        let new = validate_create(CreateTodo {
            title: "Buy milk".into(),
            description: None,
            priority: None,
        })
        .unwrap();
        assert_eq!(new.title, "Buy milk");
        assert_eq!(new.description, "");
        assert_eq!(new.priority, Priority::Medium);
    }

    #[test]
    fn create_trims_title_and_description() {
        let new = validate_create(CreateTodo {
            title: "  Buy milk  ".into(),
            description: Some("  2 liters ".into()),
            priority: Some("high".into()),
        })
        .unwrap();
        assert_eq!(new.title, "Buy milk");
        assert_eq!(new.description, "2 liters");
        assert_eq!(new.priority, Priority::High);
    }

    #[test]
    fn create_rejects_whitespace_title() {
        let err = validate_create(CreateTodo {
            title: "   ".into(),
            description: None,
            priority: None,
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn create_rejects_unknown_priority() {
        let err = validate_create(CreateTodo {
            title: "Buy milk".into(),
            description: None,
            priority: Some("urgent".into()),
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn update_leaves_absent_fields_unset() {
        let patch = validate_update(UpdateTodo {
            completed: Some(true),
            ..Default::default()
        })
        .unwrap();
        assert!(patch.title.is_none());
        assert!(patch.description.is_none());
        assert!(patch.priority.is_none());
        assert_eq!(patch.completed, Some(true));
    }

    #[test]
    fn update_allows_clearing_description() {
        let patch = validate_update(UpdateTodo {
            description: Some("  ".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(patch.description.as_deref(), Some(""));
    }

    #[test]
    fn update_rejects_empty_supplied_title() {
        let err = validate_update(UpdateTodo {
            title: Some(" ".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
