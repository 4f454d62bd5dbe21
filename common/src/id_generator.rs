use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "Swift", "Brave", "Clever", "Mighty", "Silent", "Golden", "Wild", "Noble",
    "Fierce", "Gentle", "Quick", "Wise", "Bold", "Proud", "Cunning", "Sly",
];

const SHAPES: &[&str] = &[
    "Cross", "Circle", "Grid", "Corner", "Diagonal", "Column", "Row", "Square",
];

/// Short human-readable tag used to tell sessions apart in the log.
pub fn generate_session_id() -> String {
    let mut rng = rand::rng();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let shape = SHAPES[rng.random_range(0..SHAPES.len())];
    let suffix: u16 = rng.random_range(0..1000);
    format!("{}{}-{:03}", adjective, shape, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_has_suffix() {
        let id = generate_session_id();
        let (name, suffix) = id.rsplit_once('-').unwrap();
        assert!(!name.is_empty());
        assert_eq!(suffix.len(), 3);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }
}
