//! Database operations for boards, lists and tasks
//!
//! Every function takes a `&mut SqliteConnection` so it runs the same on a
//! pooled connection or inside a transaction. Lookups of lists and tasks are
//! always scoped to the owner's board: an entity on someone else's board is
//! indistinguishable from a missing one.

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use uuid::Uuid;

use crate::shared::kanban::{Board, BoardList, Priority, Task};

const SCHEMA: &str = include_str!("schema.sql");

/// Create tables and indexes if they do not exist yet
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

/// Get the board owned by a user, without its lists
pub async fn find_board_by_owner(
    conn: &mut SqliteConnection,
    owner_id: &str,
) -> Result<Option<Board>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, owner_id
        FROM boards
        WHERE owner_id = ?
        "#,
    )
    .bind(owner_id)
    .fetch_optional(&mut *conn)
    .await?;

    row.map(|r| {
        Ok(Board {
            id: r.try_get("id")?,
            owner_id: r.try_get("owner_id")?,
            lists: Vec::new(),
        })
    })
    .transpose()
}

/// Insert a board unless its owner already has one
///
/// Returns `true` when this call created the board.
pub async fn insert_board_if_absent(
    conn: &mut SqliteConnection,
    board: &Board,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO boards (id, owner_id, created_at)
        VALUES (?, ?, ?)
        ON CONFLICT(owner_id) DO NOTHING
        "#,
    )
    .bind(board.id)
    .bind(&board.owner_id)
    .bind(Utc::now())
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected() == 1)
}

/// Fill in a board's lists and their tasks, in board order
pub async fn load_board_contents(
    conn: &mut SqliteConnection,
    mut board: Board,
) -> Result<Board, sqlx::Error> {
    let list_rows = sqlx::query(
        r#"
        SELECT id, board_id, title
        FROM lists
        WHERE board_id = ?
        ORDER BY position ASC
        "#,
    )
    .bind(board.id)
    .fetch_all(&mut *conn)
    .await?;

    let mut lists = list_rows
        .iter()
        .map(row_to_list)
        .collect::<Result<Vec<_>, _>>()?;

    let task_rows = sqlx::query(
        r#"
        SELECT t.id, t.title, t.description, t.due_date, t.priority, t.list_id
        FROM tasks t
        JOIN lists l ON l.id = t.list_id
        WHERE l.board_id = ?
        ORDER BY t.position ASC
        "#,
    )
    .bind(board.id)
    .fetch_all(&mut *conn)
    .await?;

    for row in &task_rows {
        let task = row_to_task(row)?;
        if let Some(list) = lists.iter_mut().find(|list| list.id == task.list_id) {
            list.tasks.push(task);
        }
    }

    board.lists = lists;
    Ok(board)
}

/// Append a list to the end of its board
pub async fn insert_list(conn: &mut SqliteConnection, list: &BoardList) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO lists (id, board_id, title, position, created_at)
        VALUES (?, ?, ?, (SELECT COALESCE(MAX(position) + 1, 0) FROM lists WHERE board_id = ?), ?)
        "#,
    )
    .bind(list.id)
    .bind(list.board_id)
    .bind(&list.title)
    .bind(list.board_id)
    .bind(Utc::now())
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Get a list on the owner's board, without its tasks
pub async fn find_list_for_owner(
    conn: &mut SqliteConnection,
    owner_id: &str,
    list_id: Uuid,
) -> Result<Option<BoardList>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT l.id, l.board_id, l.title
        FROM lists l
        JOIN boards b ON b.id = l.board_id
        WHERE l.id = ? AND b.owner_id = ?
        "#,
    )
    .bind(list_id)
    .bind(owner_id)
    .fetch_optional(&mut *conn)
    .await?;

    row.as_ref().map(row_to_list).transpose()
}

/// Delete every task owned by a list
pub async fn delete_tasks_for_list(
    conn: &mut SqliteConnection,
    list_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks WHERE list_id = ?")
        .bind(list_id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected())
}

/// Delete a list
pub async fn delete_list(conn: &mut SqliteConnection, list_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM lists WHERE id = ?")
        .bind(list_id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected())
}

/// Append a task to the end of its list
pub async fn insert_task(conn: &mut SqliteConnection, task: &Task) -> Result<(), sqlx::Error> {
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO tasks (id, list_id, title, description, due_date, priority, position, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, (SELECT COALESCE(MAX(position) + 1, 0) FROM tasks WHERE list_id = ?), ?, ?)
        "#,
    )
    .bind(task.id)
    .bind(task.list_id)
    .bind(&task.title)
    .bind(&task.description)
    .bind(task.due_date)
    .bind(task.priority.as_str())
    .bind(task.list_id)
    .bind(now)
    .bind(now)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Get a task on the owner's board
pub async fn find_task_for_owner(
    conn: &mut SqliteConnection,
    owner_id: &str,
    task_id: Uuid,
) -> Result<Option<Task>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT t.id, t.title, t.description, t.due_date, t.priority, t.list_id
        FROM tasks t
        JOIN lists l ON l.id = t.list_id
        JOIN boards b ON b.id = l.board_id
        WHERE t.id = ? AND b.owner_id = ?
        "#,
    )
    .bind(task_id)
    .bind(owner_id)
    .fetch_optional(&mut *conn)
    .await?;

    row.as_ref().map(row_to_task).transpose()
}

/// Reassign a task to another list, at the end of it
pub async fn move_task(
    conn: &mut SqliteConnection,
    task_id: Uuid,
    list_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE tasks
        SET list_id = ?,
            position = (SELECT COALESCE(MAX(position) + 1, 0) FROM tasks WHERE list_id = ?),
            updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(list_id)
    .bind(list_id)
    .bind(Utc::now())
    .bind(task_id)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Persist a task's editable fields
pub async fn update_task_fields(conn: &mut SqliteConnection, task: &Task) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE tasks
        SET title = ?, description = ?, due_date = ?, priority = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&task.title)
    .bind(&task.description)
    .bind(task.due_date)
    .bind(task.priority.as_str())
    .bind(Utc::now())
    .bind(task.id)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Delete a task
pub async fn delete_task(conn: &mut SqliteConnection, task_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(task_id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected())
}

/// Count the tasks whose back-reference points at a list
pub async fn count_tasks_for_list(
    conn: &mut SqliteConnection,
    list_id: Uuid,
) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks WHERE list_id = ?")
        .bind(list_id)
        .fetch_one(&mut *conn)
        .await?;

    Ok(count)
}

fn row_to_list(row: &SqliteRow) -> Result<BoardList, sqlx::Error> {
    Ok(BoardList {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        board_id: row.try_get("board_id")?,
        tasks: Vec::new(),
    })
}

fn row_to_task(row: &SqliteRow) -> Result<Task, sqlx::Error> {
    let priority = row
        .try_get::<String, _>("priority")?
        .parse::<Priority>()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

    Ok(Task {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        due_date: row.try_get("due_date")?,
        priority,
        list_id: row.try_get("list_id")?,
    })
}
