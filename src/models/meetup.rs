use serde::{Deserialize, Serialize};
use crate::helpers::date_format::day_label_from_unix_millis;
use crate::models::Envelope;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Meetup {
    pub link: String,
    pub name: String,
    pub host: String,
    pub creation_date: String,
}

#[derive(Deserialize, Debug)]
pub struct UpcomingEventsResponse {
    pub events: Vec<Event>,
}

#[derive(Deserialize, Debug)]
pub struct Event {
    pub link: String,
    pub name: String,
    pub group: EventGroup,
    /// Unix milliseconds.
    pub created: i64,
}

#[derive(Deserialize, Debug)]
pub struct EventGroup {
    pub name: String,
}

impl Envelope for UpcomingEventsResponse {
    type Item = Event;

    fn into_items(self) -> Vec<Event> {
        self.events
    }
}

impl TryFrom<Event> for Meetup {
    type Error = anyhow::Error;

    fn try_from(event: Event) -> anyhow::Result<Self> {
        Ok(Self {
            link: event.link,
            name: event.name,
            host: event.group.name,
            creation_date: day_label_from_unix_millis(event.created)?,
        })
    }
}
