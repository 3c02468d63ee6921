//! Deterministic customer names and contact details for synthetic
//! datasets. Same RNG stream = same names.

use crate::rng::StreamRng;

pub struct NameGenerator;

impl NameGenerator {
    pub fn full_name(rng: &mut StreamRng) -> String {
        let first = rng.pick(FIRST_NAMES);
        let last = rng.pick(LAST_NAMES);
        format!("{first} {last}")
    }

    /// `jane.smith.42@example.com` style address; `seq` keeps it unique.
    pub fn email(full_name: &str, seq: u32) -> String {
        let local = full_name.to_lowercase().replace(' ', ".");
        format!("{local}.{seq}@example.com")
    }

    pub fn phone(rng: &mut StreamRng) -> String {
        format!("555-{:04}", rng.next_u64_below(10_000))
    }

    pub fn address(rng: &mut StreamRng) -> String {
        let number = rng.range_inclusive(1, 999);
        let street = rng.pick(STREETS);
        format!("{number} {street}, Singapore")
    }

    pub fn location(rng: &mut StreamRng) -> String {
        format!("Singapore - {}", rng.pick(DISTRICTS))
    }
}

const FIRST_NAMES: &[&str] = &[
    "Aisha", "Benjamin", "Chloe", "Darren", "Elaine", "Farid", "Grace", "Hafiz",
    "Irene", "Jun", "Kavya", "Leon", "Mei", "Nathan", "Olivia", "Priya",
    "Qi", "Rahul", "Siti", "Terence", "Uma", "Vincent", "Wei", "Xavier",
    "Yusuf", "Zoe", "Arjun", "Bryan", "Clara", "Daniel", "Esther", "Felix",
];

const LAST_NAMES: &[&str] = &[
    "Tan", "Lim", "Lee", "Ng", "Ong", "Wong", "Goh", "Chua", "Chan", "Koh",
    "Teo", "Ang", "Yeo", "Tay", "Ho", "Low", "Kumar", "Singh", "Rahman", "Ismail",
    "Nair", "Pillai", "Fernandez", "Smith", "Brown",
];

const STREETS: &[&str] = &[
    "Maple St", "Oak Rd", "Pine Ln", "Birch Blvd", "Cedar Ave", "Orchard Rd",
    "Bukit Timah Rd", "Serangoon Ave", "Tampines St", "Jurong West St",
];

const DISTRICTS: &[&str] = &[
    "Orchard", "Tampines", "Jurong", "Bugis", "Woodlands", "Raffles Place",
    "Marina Bay", "Geylang", "Ang Mo Kio", "Bedok",
];
