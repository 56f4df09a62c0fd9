//! Shared records for the integration tests.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub country: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: &str, country: &str, age: u32) -> Self {
        Self { name: name.to_string(), country: country.to_string(), age }
    }
}

#[allow(dead_code)]
pub fn people() -> Vec<Person> {
    vec![
        Person::new("Alice", "USA", 30),
        Person::new("Bob", "USA", 30),
        Person::new("Charlie", "USA", 25),
        Person::new("Diana", "UK", 30),
    ]
}

#[allow(dead_code)]
pub fn country_of(p: &Person) -> (&'static str, String) {
    ("Country", p.country.clone())
}

#[allow(dead_code)]
pub fn age_of(p: &Person) -> (&'static str, String) {
    ("Age", p.age.to_string())
}
