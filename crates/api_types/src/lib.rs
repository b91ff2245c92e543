use serde::{Deserialize, Serialize};

pub mod expense {
    use super::*;

    /// An expense as returned by the server.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct Expense {
        pub id: i64,
        pub title: String,
        pub amount: f64,
        pub note: String,
        pub tags: Vec<String>,
    }

    /// Body of `POST /expenses`.
    ///
    /// The id is assigned by the server, so an `id` key in the body is
    /// ignored. Missing fields fall back to their empty value.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ExpenseNew {
        pub title: String,
        pub amount: f64,
        pub note: String,
        pub tags: Vec<String>,
    }

    /// Body of `PUT /expenses/{id}`.
    ///
    /// The row is always the one named in the path. `id` may be omitted; when
    /// present it must match the path id.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ExpenseUpdate {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub id: Option<i64>,
        pub title: String,
        pub amount: f64,
        pub note: String,
        pub tags: Vec<String>,
    }
}
