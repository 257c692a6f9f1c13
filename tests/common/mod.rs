#![allow(dead_code)]

pub mod mocks;

use serde_json::{json, Value};

pub fn developer_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "phone": "555-0100",
        "role": "DEVELOPER"
    })
}

pub fn client_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "phone": "555-0199",
        "role": "CLIENT"
    })
}

pub fn project_json(id: i64, title: &str, status: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{} description", title),
        "status": status,
        "client": client_json(90, "Acme"),
        "developers": [developer_json(4, "Dev")]
    })
}

pub fn task_json(id: i64, title: &str, completed: bool) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "",
        "completed": completed,
        "developer": developer_json(4, "Dev")
    })
}
