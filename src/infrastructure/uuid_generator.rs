use crate::application::services::IdGenerator;
use crate::domain::value_objects::PayloadUuid;
use uuid::Uuid;

/// Random (version 4) payload identifiers
#[derive(Debug, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> PayloadUuid {
        PayloadUuid::from(Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_v4_and_formatted_8_4_4_4_12() {
        let id = RandomIdGenerator.next_id();
        let text = id.to_string();
        assert_eq!(Uuid::parse_str(&text).unwrap().get_version_num(), 4);

        let groups: Vec<usize> = text.split('-').map(str::len).collect();
        assert_eq!(groups, vec![8, 4, 4, 4, 12]);
        assert!(
            text.chars()
                .all(|c| c == '-' || c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }

    #[test]
    fn ids_do_not_repeat() {
        let generator = RandomIdGenerator;
        let ids: HashSet<PayloadUuid> = (0..1000).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
