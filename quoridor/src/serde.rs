use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer, Error, Unexpected, Visitor};
use serde::ser::{Serialize, Serializer};

use super::{Action, Position, Wall};

/// Reads any notation type back from the string written by its `Display`.
struct NotationVisitor<T> {
    expecting: &'static str,
    _marker: PhantomData<T>,
}

impl<T> NotationVisitor<T> {
    fn new(expecting: &'static str) -> Self {
        Self {
            expecting,
            _marker: PhantomData,
        }
    }
}

impl<'de, T: FromStr> Visitor<'de> for NotationVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        v.parse::<T>()
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

macro_rules! impl_notation_serde {
    ($type:ty, $expecting:expr) => {
        impl Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_str(NotationVisitor::new($expecting))
            }
        }
    };
}

impl_notation_serde!(Position, "a column letter followed by a row number");
impl_notation_serde!(Wall, "a wall anchor followed by 'h' or 'v'");
impl_notation_serde!(
    Action,
    "a column letter followed by a row number, optionally followed by 'h' or 'v' for a wall"
);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_action_pawn_move_ser_json() {
        let action = Action::MovePawn(Position::new(0, 0));

        assert_eq!(json!(action), "a1");
    }

    #[test]
    fn test_action_walls_ser_json() {
        assert_eq!(json!(Action::PlaceWall(Wall::vertical(2, 3))), "d3v");
        assert_eq!(json!(Action::PlaceWall(Wall::horizontal(7, 7))), "h8h");
    }

    #[test]
    fn test_action_deser() {
        assert_eq!(
            serde_json::from_str::<Action>("\"i9\"").unwrap(),
            Action::MovePawn(Position::new(8, 8)),
        );
        assert_eq!(
            serde_json::from_str::<Action>("\"b6h\"").unwrap(),
            Action::PlaceWall(Wall::horizontal(5, 1)),
        );
    }

    #[test]
    fn test_position_and_wall_use_notation() {
        assert_eq!(json!(Position::new(8, 4)), "e9");
        assert_eq!(json!(Wall::horizontal(3, 2)), "c4h");
        assert_eq!(
            serde_json::from_str::<Wall>("\"a12v\"").unwrap(),
            Wall::vertical(11, 0)
        );
    }

    #[test]
    fn test_game_record_round_trip() {
        let actions = vec![
            Action::MovePawn(Position::new(7, 4)),
            Action::PlaceWall(Wall::vertical(0, 0)),
        ];

        let json = serde_json::to_string(&actions).unwrap();

        assert_eq!(json, r#"["e8","a1v"]"#);
        assert_eq!(serde_json::from_str::<Vec<Action>>(&json).unwrap(), actions);
    }

    #[test]
    fn test_deser_rejects_invalid() {
        assert!(serde_json::from_str::<Action>("\"b6q\"").is_err());
        assert!(serde_json::from_str::<Action>("12").is_err());
        assert!(serde_json::from_str::<Position>("\"e9h\"").is_err());
        assert!(serde_json::from_str::<Wall>("\"e9\"").is_err());
    }
}
