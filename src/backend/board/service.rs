//! Board Service
//!
//! Orchestrates the board operations on top of the store. Operations that
//! touch more than one row (deleting a list with its tasks, moving a task and
//! editing it) run inside a single transaction, so a failure part-way
//! through leaves nothing behind.

use sqlx::{Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

use super::db;
use crate::backend::error::BackendError;
use crate::shared::kanban::{validate_title, Board, BoardList, CreateTaskRequest, Task, TaskChanges};

/// Board operations scoped to a single owner per call
#[derive(Clone, Debug)]
pub struct BoardService {
    pool: SqlitePool,
}

impl BoardService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Start a transaction holding the write lock from its first statement
    ///
    /// A deferred transaction that reads first cannot wait for the lock when
    /// it later writes; SQLite fails it immediately with `SQLITE_BUSY`.
    async fn write_transaction(&self) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin_with("BEGIN IMMEDIATE").await
    }

    /// Get the owner's board with lists and tasks expanded
    ///
    /// Creates an empty board the first time an owner asks for it. Concurrent
    /// first fetches converge on the same board through the unique owner
    /// column.
    pub async fn get_or_create_board(&self, owner_id: &str) -> Result<Board, BackendError> {
        let mut conn = self.pool.acquire().await?;

        let board = match db::find_board_by_owner(&mut conn, owner_id).await? {
            Some(board) => board,
            None => {
                if db::insert_board_if_absent(&mut conn, &Board::new(owner_id)).await? {
                    tracing::info!(owner_id, "Created board");
                }
                db::find_board_by_owner(&mut conn, owner_id)
                    .await?
                    .ok_or_else(|| BackendError::not_found("Board"))?
            }
        };

        let board = db::load_board_contents(&mut conn, board).await?;
        tracing::debug!(
            owner_id,
            lists = board.lists.len(),
            tasks = board.task_count(),
            "Loaded board"
        );
        Ok(board)
    }

    /// Append a new list to the owner's board
    pub async fn create_list(&self, owner_id: &str, title: &str) -> Result<BoardList, BackendError> {
        let title = validate_title(title)?;
        let mut conn = self.pool.acquire().await?;

        let board = db::find_board_by_owner(&mut conn, owner_id)
            .await?
            .ok_or_else(|| BackendError::not_found("Board"))?;

        let list = BoardList::new(board.id, title);
        db::insert_list(&mut conn, &list).await?;

        tracing::info!(owner_id, list_id = %list.id, "Created list");
        Ok(list)
    }

    /// Delete a list and every task on it
    pub async fn delete_list(&self, owner_id: &str, list_id: Uuid) -> Result<(), BackendError> {
        let mut tx = self.write_transaction().await?;

        db::find_board_by_owner(&mut tx, owner_id)
            .await?
            .ok_or_else(|| BackendError::not_found("Board"))?;
        db::find_list_for_owner(&mut tx, owner_id, list_id)
            .await?
            .ok_or_else(|| BackendError::not_found("List"))?;

        let removed_tasks = db::delete_tasks_for_list(&mut tx, list_id).await?;
        db::delete_list(&mut tx, list_id).await?;
        tx.commit().await?;

        tracing::info!(owner_id, %list_id, removed_tasks, "Deleted list");
        Ok(())
    }

    /// Create a task at the end of one of the owner's lists
    pub async fn create_task(
        &self,
        owner_id: &str,
        request: CreateTaskRequest,
    ) -> Result<Task, BackendError> {
        let task = request.into_task()?;
        let mut conn = self.pool.acquire().await?;

        db::find_list_for_owner(&mut conn, owner_id, task.list_id)
            .await?
            .ok_or_else(|| BackendError::not_found("List"))?;

        db::insert_task(&mut conn, &task).await?;

        tracing::info!(owner_id, task_id = %task.id, list_id = %task.list_id, "Created task");
        Ok(task)
    }

    /// Update a task's fields, moving it to another list when `list_id` differs
    ///
    /// A moved task is appended to the end of its destination list.
    pub async fn update_task(
        &self,
        owner_id: &str,
        task_id: Uuid,
        changes: TaskChanges,
    ) -> Result<Task, BackendError> {
        let mut tx = self.write_transaction().await?;

        let mut task = db::find_task_for_owner(&mut tx, owner_id, task_id)
            .await?
            .ok_or_else(|| BackendError::not_found("Task"))?;

        if let Some(destination) = changes.list_id.filter(|id| *id != task.list_id) {
            db::find_list_for_owner(&mut tx, owner_id, destination)
                .await?
                .ok_or_else(|| BackendError::not_found("List"))?;

            db::move_task(&mut tx, task.id, destination).await?;
            tracing::info!(
                owner_id,
                %task_id,
                from = %task.list_id,
                to = %destination,
                "Moved task"
            );
            task.list_id = destination;
        }

        task.apply(&changes);
        db::update_task_fields(&mut tx, &task).await?;
        tx.commit().await?;

        Ok(task)
    }

    /// Delete a task, removing it from its list
    pub async fn delete_task(&self, owner_id: &str, task_id: Uuid) -> Result<(), BackendError> {
        let mut conn = self.pool.acquire().await?;

        let task = db::find_task_for_owner(&mut conn, owner_id, task_id)
            .await?
            .ok_or_else(|| BackendError::not_found("Task"))?;

        db::delete_task(&mut conn, task.id).await?;

        tracing::info!(owner_id, %task_id, list_id = %task.list_id, "Deleted task");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::connect_database;
    use crate::shared::kanban::Priority;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    async fn service() -> BoardService {
        let pool = connect_database("sqlite::memory:", 1).await.unwrap();
        BoardService::new(pool)
    }

    fn new_task(list_id: Uuid, title: &str) -> CreateTaskRequest {
        CreateTaskRequest {
            title: title.to_string(),
            description: None,
            due_date: None,
            priority: None,
            list_id,
        }
    }

    fn task_ids(list: &BoardList) -> Vec<Uuid> {
        list.tasks.iter().map(|task| task.id).collect()
    }

    #[tokio::test]
    async fn test_board_created_once() {
        let service = service().await;

        let first = service.get_or_create_board("alice").await.unwrap();
        assert!(first.lists.is_empty());
        assert_eq!(first.owner_id, "alice");

        let second = service.get_or_create_board("alice").await.unwrap();
        assert_eq!(first.id, second.id);

        let (boards,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM boards")
            .fetch_one(service.pool())
            .await
            .unwrap();
        assert_eq!(boards, 1);
    }

    #[tokio::test]
    async fn test_create_list_requires_board() {
        let service = service().await;
        let result = service.create_list("nobody", "Todo").await;
        assert_matches!(result, Err(BackendError::NotFound { entity: "Board" }));
    }

    #[tokio::test]
    async fn test_create_list_rejects_blank_title() {
        let service = service().await;
        service.get_or_create_board("alice").await.unwrap();
        let result = service.create_list("alice", "   ").await;
        assert_matches!(result, Err(BackendError::SharedError(_)));
    }

    #[tokio::test]
    async fn test_lists_keep_creation_order() {
        let service = service().await;
        service.get_or_create_board("alice").await.unwrap();
        for title in ["Todo", "Doing", "Done"] {
            service.create_list("alice", title).await.unwrap();
        }

        let board = service.get_or_create_board("alice").await.unwrap();
        let titles: Vec<_> = board.lists.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Todo", "Doing", "Done"]);
        assert!(board.lists.iter().all(|l| l.board_id == board.id));
    }

    #[tokio::test]
    async fn test_task_defaults_to_medium() {
        let service = service().await;
        service.get_or_create_board("alice").await.unwrap();
        let list = service.create_list("alice", "Todo").await.unwrap();

        let task = service.create_task("alice", new_task(list.id, "Write")).await.unwrap();
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.list_id, list.id);

        let board = service.get_or_create_board("alice").await.unwrap();
        assert_eq!(task_ids(&board.lists[0]), vec![task.id]);
        assert_eq!(board.lists[0].tasks[0], task);
    }

    #[tokio::test]
    async fn test_create_task_on_missing_list() {
        let service = service().await;
        service.get_or_create_board("alice").await.unwrap();
        let result = service.create_task("alice", new_task(Uuid::new_v4(), "Write")).await;
        assert_matches!(result, Err(BackendError::NotFound { entity: "List" }));
    }

    #[tokio::test]
    async fn test_delete_list_cascades_to_tasks() {
        let service = service().await;
        service.get_or_create_board("alice").await.unwrap();
        let doomed = service.create_list("alice", "Doomed").await.unwrap();
        let kept = service.create_list("alice", "Kept").await.unwrap();
        service.create_task("alice", new_task(doomed.id, "a")).await.unwrap();
        service.create_task("alice", new_task(doomed.id, "b")).await.unwrap();
        let survivor = service.create_task("alice", new_task(kept.id, "c")).await.unwrap();

        service.delete_list("alice", doomed.id).await.unwrap();

        let board = service.get_or_create_board("alice").await.unwrap();
        assert!(board.list(doomed.id).is_none());
        assert_eq!(board.lists.len(), 1);
        assert_eq!(task_ids(&board.lists[0]), vec![survivor.id]);

        let mut conn = service.pool().acquire().await.unwrap();
        assert_eq!(db::count_tasks_for_list(&mut conn, doomed.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_list_not_found() {
        let service = service().await;
        assert_matches!(
            service.delete_list("alice", Uuid::new_v4()).await,
            Err(BackendError::NotFound { entity: "Board" })
        );

        service.get_or_create_board("alice").await.unwrap();
        assert_matches!(
            service.delete_list("alice", Uuid::new_v4()).await,
            Err(BackendError::NotFound { entity: "List" })
        );
    }

    #[tokio::test]
    async fn test_move_task_between_lists() {
        let service = service().await;
        service.get_or_create_board("alice").await.unwrap();
        let l1 = service.create_list("alice", "L1").await.unwrap();
        let l2 = service.create_list("alice", "L2").await.unwrap();
        let t1 = service.create_task("alice", new_task(l1.id, "T1")).await.unwrap();
        let existing = service.create_task("alice", new_task(l2.id, "T2")).await.unwrap();

        let moved = service
            .update_task("alice", t1.id, TaskChanges::move_to(l2.id))
            .await
            .unwrap();
        assert_eq!(moved.list_id, l2.id);

        let board = service.get_or_create_board("alice").await.unwrap();
        assert!(!board.list(l1.id).unwrap().contains_task(t1.id));
        assert_eq!(task_ids(board.list(l2.id).unwrap()), vec![existing.id, t1.id]);
    }

    #[tokio::test]
    async fn test_move_to_same_list_is_not_a_move() {
        let service = service().await;
        service.get_or_create_board("alice").await.unwrap();
        let list = service.create_list("alice", "L1").await.unwrap();
        let first = service.create_task("alice", new_task(list.id, "first")).await.unwrap();
        let second = service.create_task("alice", new_task(list.id, "second")).await.unwrap();

        service
            .update_task("alice", first.id, TaskChanges::move_to(list.id))
            .await
            .unwrap();

        let board = service.get_or_create_board("alice").await.unwrap();
        assert_eq!(task_ids(&board.lists[0]), vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_move_to_missing_list_changes_nothing() {
        let service = service().await;
        service.get_or_create_board("alice").await.unwrap();
        let list = service.create_list("alice", "L1").await.unwrap();
        let task = service.create_task("alice", new_task(list.id, "T1")).await.unwrap();

        let changes = TaskChanges {
            title: Some("Renamed".to_string()),
            list_id: Some(Uuid::new_v4()),
            ..TaskChanges::default()
        };
        let result = service.update_task("alice", task.id, changes).await;
        assert_matches!(result, Err(BackendError::NotFound { entity: "List" }));

        let board = service.get_or_create_board("alice").await.unwrap();
        assert_eq!(board.lists[0].tasks[0].title, "T1");
    }

    #[tokio::test]
    async fn test_update_fields_without_move() {
        let service = service().await;
        service.get_or_create_board("alice").await.unwrap();
        let list = service.create_list("alice", "L1").await.unwrap();
        let mut request = new_task(list.id, "T1");
        request.description = Some("details".to_string());
        let task = service.create_task("alice", request).await.unwrap();

        let due = "2026-12-24T18:00:00Z".parse().unwrap();
        let changes = TaskChanges {
            title: Some("T1 revised".to_string()),
            description: Some(None),
            due_date: Some(Some(due)),
            priority: Some(Priority::High),
            list_id: None,
        };
        let updated = service.update_task("alice", task.id, changes).await.unwrap();

        let board = service.get_or_create_board("alice").await.unwrap();
        let stored = &board.lists[0].tasks[0];
        assert_eq!(stored, &updated);
        assert_eq!(stored.title, "T1 revised");
        assert_eq!(stored.description, None);
        assert_eq!(stored.due_date, Some(due));
        assert_eq!(stored.priority, Priority::High);
    }

    #[tokio::test]
    async fn test_delete_task_removes_from_list() {
        let service = service().await;
        service.get_or_create_board("alice").await.unwrap();
        let list = service.create_list("alice", "L1").await.unwrap();
        let gone = service.create_task("alice", new_task(list.id, "gone")).await.unwrap();
        let stays = service.create_task("alice", new_task(list.id, "stays")).await.unwrap();

        service.delete_task("alice", gone.id).await.unwrap();

        let board = service.get_or_create_board("alice").await.unwrap();
        assert_eq!(task_ids(&board.lists[0]), vec![stays.id]);
        assert_matches!(
            service.delete_task("alice", gone.id).await,
            Err(BackendError::NotFound { entity: "Task" })
        );
    }

    #[tokio::test]
    async fn test_other_owners_are_invisible() {
        let service = service().await;
        service.get_or_create_board("alice").await.unwrap();
        service.get_or_create_board("mallory").await.unwrap();
        let list = service.create_list("alice", "Private").await.unwrap();
        let task = service.create_task("alice", new_task(list.id, "secret")).await.unwrap();
        let mallory_list = service.create_list("mallory", "Mine").await.unwrap();

        assert_matches!(
            service.create_task("mallory", new_task(list.id, "intrude")).await,
            Err(BackendError::NotFound { entity: "List" })
        );
        assert_matches!(
            service.delete_list("mallory", list.id).await,
            Err(BackendError::NotFound { entity: "List" })
        );
        assert_matches!(
            service.delete_task("mallory", task.id).await,
            Err(BackendError::NotFound { entity: "Task" })
        );
        assert_matches!(
            service.update_task("alice", task.id, TaskChanges::move_to(mallory_list.id)).await,
            Err(BackendError::NotFound { entity: "List" })
        );

        let board = service.get_or_create_board("alice").await.unwrap();
        assert_eq!(task_ids(&board.lists[0]), vec![task.id]);
        let theirs = service.get_or_create_board("mallory").await.unwrap();
        assert!(theirs.lists[0].tasks.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_moves_on_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("board.db").display());
        let service = BoardService::new(connect_database(&url, 5).await.unwrap());

        service.get_or_create_board("alice").await.unwrap();
        let l1 = service.create_list("alice", "L1").await.unwrap();
        let l2 = service.create_list("alice", "L2").await.unwrap();
        let mut tasks = Vec::new();
        for i in 0..20 {
            let task = service
                .create_task("alice", new_task(l1.id, &format!("T{}", i)))
                .await
                .unwrap();
            tasks.push(task.id);
        }

        let mut moves = tokio::task::JoinSet::new();
        for task_id in tasks.iter().copied() {
            let service = service.clone();
            moves.spawn(async move {
                service
                    .update_task("alice", task_id, TaskChanges::move_to(l2.id))
                    .await
            });
        }
        while let Some(result) = moves.join_next().await {
            let moved = result.unwrap().unwrap();
            assert_eq!(moved.list_id, l2.id);
        }

        let board = service.get_or_create_board("alice").await.unwrap();
        assert!(board.list(l1.id).unwrap().tasks.is_empty());
        let mut moved = task_ids(board.list(l2.id).unwrap());
        moved.sort();
        tasks.sort();
        assert_eq!(moved, tasks);

        let (distinct,): (i64,) =
            sqlx::query_as("SELECT COUNT(DISTINCT position) FROM tasks WHERE list_id = ?")
                .bind(l2.id)
                .fetch_one(service.pool())
                .await
                .unwrap();
        assert_eq!(distinct, 20);
    }
}
