use chrono::Utc;
use tokio::sync::Mutex;
use tracing::info;

use crate::db::Database;
use crate::errors::{TaskError, TaskResult};
use crate::models::{Task, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};

/// Validation and defaulting in front of [`Database`].
///
/// All storage calls go through one mutex, which also makes `toggle`'s
/// read-then-write atomic with respect to other requests in this process.
pub struct TaskService {
    db: Mutex<Database>,
}

impl TaskService {
    pub fn new(db: Database) -> Self {
        Self { db: Mutex::new(db) }
    }

    pub async fn create(&self, title: Option<&str>, description: Option<&str>) -> TaskResult<Task> {
        let title = title.unwrap_or_default();
        let description = description.unwrap_or_default();

        if title.trim().is_empty() {
            return Err(TaskError::validation("title is required"));
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(TaskError::validation(format!(
                "title must be at most {TITLE_MAX_CHARS} characters"
            )));
        }
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(TaskError::validation(format!(
                "description must be at most {DESCRIPTION_MAX_CHARS} characters"
            )));
        }

        let task = self.db.lock().await.insert(title, description, Utc::now())?;
        info!(task_id = task.id, "task created");
        Ok(task)
    }

    pub async fn list(&self) -> TaskResult<Vec<Task>> {
        self.db.lock().await.list_all()
    }

    pub async fn get(&self, id: i64) -> TaskResult<Task> {
        self.db.lock().await.get(id)
    }

    /// Flips `completed` and returns the new value.
    pub async fn toggle(&self, id: i64) -> TaskResult<bool> {
        let db = self.db.lock().await;
        let completed = !db.get(id)?.completed;
        db.update_completed(id, completed)?;
        info!(task_id = id, completed, "task toggled");
        Ok(completed)
    }

    pub async fn remove(&self, id: i64) -> TaskResult<()> {
        self.db.lock().await.delete(id)?;
        info!(task_id = id, "task deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TaskService {
        TaskService::new(Database::open_in_memory().unwrap())
    }

    #[tokio::test]
    async fn create_then_list_contains_task_once() {
        let service = service();
        let before = Utc::now();
        let task = service.create(Some("Buy milk"), Some("2 liters")).await.unwrap();

        let tasks = service.list().await.unwrap();
        let matching: Vec<&Task> = tasks.iter().filter(|t| t.id == task.id).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].title, "Buy milk");
        assert_eq!(matching[0].description, "2 liters");
        assert!(!matching[0].completed);
        assert!(matching[0].created_at >= before);
        assert!(matching[0].created_at <= Utc::now());
    }

    #[tokio::test]
    async fn title_and_description_are_stored_as_given() {
        let service = service();
        let task = service.create(Some("  Buy milk "), Some(" 2 liters\n")).await.unwrap();

        let stored = service.get(task.id).await.unwrap();
        assert_eq!(stored.title, "  Buy milk ");
        assert_eq!(stored.description, " 2 liters\n");
        assert_eq!(service.list().await.unwrap()[0].title, "  Buy milk ");
    }

    #[tokio::test]
    async fn description_defaults_to_empty() {
        let service = service();
        let task = service.create(Some("No details"), None).await.unwrap();
        assert_eq!(service.get(task.id).await.unwrap().description, "");
    }

    #[tokio::test]
    async fn missing_or_blank_title_is_rejected_without_insert() {
        let service = service();
        for title in [None, Some(""), Some("  \t ")] {
            let err = service.create(title, Some("x")).await.unwrap_err();
            assert!(matches!(err, TaskError::Validation(_)));
        }
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn length_limits_count_characters() {
        let service = service();
        let title = "é".repeat(TITLE_MAX_CHARS);
        assert!(service.create(Some(&title), None).await.is_ok());

        let too_long = "a".repeat(TITLE_MAX_CHARS + 1);
        assert!(matches!(
            service.create(Some(&too_long), None).await,
            Err(TaskError::Validation(_))
        ));

        let description = "d".repeat(DESCRIPTION_MAX_CHARS + 1);
        assert!(matches!(
            service.create(Some("ok"), Some(&description)).await,
            Err(TaskError::Validation(_))
        ));
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn toggle_twice_restores_state() {
        let service = service();
        let task = service.create(Some("flip"), None).await.unwrap();

        assert!(service.toggle(task.id).await.unwrap());
        assert!(service.get(task.id).await.unwrap().completed);
        assert!(!service.toggle(task.id).await.unwrap());
        assert!(!service.get(task.id).await.unwrap().completed);
    }

    #[tokio::test]
    async fn removed_task_is_gone_for_every_operation() {
        let service = service();
        let task = service.create(Some("temp"), None).await.unwrap();
        service.remove(task.id).await.unwrap();

        assert!(matches!(service.get(task.id).await, Err(TaskError::NotFound(_))));
        assert!(matches!(service.toggle(task.id).await, Err(TaskError::NotFound(_))));
        assert!(matches!(service.remove(task.id).await, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn concurrent_toggles_are_serialized() {
        let service = std::sync::Arc::new(service());
        let task = service.create(Some("race"), None).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..10 {
            let service = service.clone();
            handles.push(tokio::spawn(async move { service.toggle(task.id).await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert!(!service.get(task.id).await.unwrap().completed);
    }
}
