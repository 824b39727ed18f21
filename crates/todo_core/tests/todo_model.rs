use chrono::NaiveDate;
use todo_core::{Todo, DEFAULT_CATEGORY};
use uuid::Uuid;

#[test]
fn todo_new_sets_defaults() {
    let todo = Todo::new("hello", "");

    assert!(!todo.id.is_nil());
    assert_eq!(todo.title, "hello");
    assert_eq!(todo.description, "");
    assert!(!todo.completed);
    assert_eq!(todo.due_date, None);
    assert_eq!(todo.category, DEFAULT_CATEGORY);
    assert_eq!(todo.created_at, todo.updated_at);
}

#[test]
fn todo_serialization_uses_camel_case_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut todo = Todo::with_id(id, "Buy milk", "semi-skimmed");
    todo.due_date = NaiveDate::from_ymd_opt(2026, 2, 13);

    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Buy milk");
    assert_eq!(json["description"], "semi-skimmed");
    assert_eq!(json["completed"], false);
    assert_eq!(json["dueDate"], "2026-02-13");
    assert_eq!(json["category"], "general");
    assert!(json["createdAt"].is_string());
    assert!(json["updatedAt"].is_string());
    assert!(json.get("created_at").is_none());

    let decoded: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, todo);
}

#[test]
fn absent_due_date_serializes_as_null() {
    let json = serde_json::to_value(Todo::new("no deadline", "")).unwrap();
    assert!(json["dueDate"].is_null());
}
