use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Activity {
    // The list endpoint keys activities by name, so this is filled from the map key
    #[serde(default)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }
}

// Activities in the order the server listed them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivitySet {
    activities: Vec<Activity>,
}

impl ActivitySet {
    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.activities.iter().map(|a| a.name.clone()).collect()
    }
}

impl FromIterator<Activity> for ActivitySet {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        Self { activities: iter.into_iter().collect() }
    }
}

impl<'de> Deserialize<'de> for ActivitySet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ActivitySetVisitor;

        impl<'de> Visitor<'de> for ActivitySetVisitor {
            type Value = ActivitySet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut activities: Vec<Activity> = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, mut activity)) = access.next_entry::<String, Activity>()? {
                    activity.name = name;
                    // Later duplicates replace earlier ones, same as a JSON object
                    if let Some(existing) = activities.iter_mut().find(|a| a.name == activity.name) {
                        *existing = activity;
                    } else {
                        activities.push(activity);
                    }
                }
                Ok(ActivitySet { activities })
            }
        }

        deserializer.deserialize_map(ActivitySetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_server_order_and_fills_names() {
        let json = r#"{
            "Tennis Club": {"description":"t","schedule":"Tue","max_participants":10,"participants":[]},
            "Art Studio": {"description":"a","schedule":"Wed","max_participants":16,"participants":["maya@mergington.edu"]},
            "Chess Club": {"description":"c","schedule":"Fri","max_participants":12,"participants":["michael@mergington.edu","daniel@mergington.edu"]}
        }"#;
        let set: ActivitySet = serde_json::from_str(json).unwrap();

        assert_eq!(set.names(), vec!["Tennis Club", "Art Studio", "Chess Club"]);
        let chess = set.iter().last().unwrap();
        assert_eq!(chess.name, "Chess Club");
        assert_eq!(chess.participants, vec!["michael@mergington.edu", "daniel@mergington.edu"]);
    }

    #[test]
    fn spots_left_is_capacity_minus_participants() {
        let json = r#"{"Chess Club": {"description":"d","schedule":"Mon","max_participants":2,"participants":["a@x.com"]}}"#;
        let set: ActivitySet = serde_json::from_str(json).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().spots_left(), 1);
    }

    #[test]
    fn over_capacity_goes_negative() {
        let activity = Activity {
            name: "Gym Class".into(),
            description: String::new(),
            schedule: String::new(),
            max_participants: 1,
            participants: vec!["a@x.com".into(), "b@x.com".into()],
        };
        assert_eq!(activity.spots_left(), -1);
    }

    #[test]
    fn empty_object_is_empty_set() {
        let set: ActivitySet = serde_json::from_str("{}").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn rejects_non_object_payload() {
        assert!(serde_json::from_str::<ActivitySet>("[]").is_err());
        assert!(serde_json::from_str::<ActivitySet>(r#"{"Chess Club": {"description":"d"}}"#).is_err());
    }
}
