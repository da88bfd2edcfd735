use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One canned row in the mock data store.
///
/// Serialized with the camelCase keys the generated pages read:
/// `{ "id", "firstName", "lastName", "age", "email", "password" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub email: String,
    pub password: String,
}

impl FixtureRecord {
    fn sample(id: u128, first: &str, last: &str, age: u32, email: &str, password: &str) -> Self {
        Self {
            id: Uuid::from_u128(id),
            first_name: first.into(),
            last_name: last.into(),
            age,
            email: email.into(),
            password: password.into(),
        }
    }
}

/// The default record set every generated collection starts with.
pub fn sample_records() -> Vec<FixtureRecord> {
    vec![
        FixtureRecord::sample(
            0x45f6402e_f4be_43e4_973c_b13bc5e9e949,
            "Alexander",
            "Wilson",
            33,
            "alex.wilson@example.com",
            "alexW@33!",
        ),
        FixtureRecord::sample(
            0x2de875cc_c42e_4f25_b72a_9126cfe94ed2,
            "Olivia",
            "Anderson",
            22,
            "olivia.anderson@example.com",
            "OliviaA22#",
        ),
        FixtureRecord::sample(
            0x81f39980_d3a7_43c4_a82c_78115d61e542,
            "David",
            "Thomas",
            34,
            "david.thomas@example.com",
            "dThomas#34",
        ),
    ]
}
