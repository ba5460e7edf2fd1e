use serde_json::{json, Value};

/// Candidate rows shared by the integration suites. Deliberately uneven:
/// one user has a null verification timestamp, one is missing the field and
/// the orders relation entirely.
pub fn users() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "name": "John Doe",
            "status": "active",
            "role": "admin",
            "age": 40,
            "email_verified_at": "2024-01-10T09:00:00Z",
            "profile": {"city": "Oslo"},
            "orders": [{"total": 250}, {"total": 40}],
        }),
        json!({
            "id": 2,
            "name": "Jane Roe",
            "status": "active",
            "role": "user",
            "age": 25,
            "email_verified_at": null,
            "profile": {"city": "Bergen"},
            "orders": [{"total": 60}],
        }),
        json!({
            "id": 3,
            "name": "JOHN SMITH",
            "status": "inactive",
            "role": "admin",
            "age": 55,
            "email_verified_at": "2023-11-02T12:00:00Z",
            "profile": {"city": "Oslo"},
            "orders": [],
        }),
        json!({
            "id": 4,
            "name": "Ola Nordmann",
            "status": "pending",
            "role": "user",
            "age": 17,
            "profile": {"city": "Trondheim"},
        }),
    ]
}

pub fn ids(rows: &[Value]) -> Vec<i64> {
    rows.iter().map(|row| row["id"].as_i64().unwrap()).collect()
}
