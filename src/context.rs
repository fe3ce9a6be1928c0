//! Shared search-query state: a reducer over one `RwSignal`.
//!
//! All mutation goes through [`SearchCtx::dispatch`]; components read
//! snapshots. Writes only happen synchronously inside input-event handlers,
//! so there is exactly one writer path.

use chrono::NaiveDate;
use leptos::*;

use crate::model::{Guests, SearchQuery};

#[derive(Debug, Clone, PartialEq)]
pub enum QueryAction {
    SetLocation(String),
    SetCheckIn(Option<NaiveDate>),
    SetCheckOut(Option<NaiveDate>),
    SetDates { check_in: Option<NaiveDate>, check_out: Option<NaiveDate> },
    SetGuests(Guests),
    SetPropertyType(String),
    SetFurnishing(String),
    ResetDates,
    Reset,
}

pub fn reduce(query: &mut SearchQuery, action: QueryAction) {
    match action {
        QueryAction::SetLocation(location) => query.location = location,
        QueryAction::SetCheckIn(check_in) => query.check_in = check_in,
        QueryAction::SetCheckOut(check_out) => query.check_out = check_out,
        QueryAction::SetDates { check_in, check_out } => {
            query.check_in = check_in;
            query.check_out = check_out;
        }
        QueryAction::SetGuests(guests) => query.guests = guests,
        QueryAction::SetPropertyType(property_type) => query.property_type = property_type,
        QueryAction::SetFurnishing(furnishing) => query.furnishing = furnishing,
        QueryAction::ResetDates => {
            query.check_in = None;
            query.check_out = None;
        }
        QueryAction::Reset => *query = SearchQuery::default(),
    }
}

#[derive(Clone, Copy)]
pub struct SearchCtx {
    query: RwSignal<SearchQuery>,
}

impl SearchCtx {
    pub fn provide() {
        provide_context(SearchCtx { query: create_rw_signal(SearchQuery::default()) });
    }

    pub fn expect() -> Self {
        expect_context::<SearchCtx>()
    }

    pub fn dispatch(&self, action: QueryAction) {
        self.query.update(|query| reduce(query, action));
    }

    pub fn snapshot(&self) -> SearchQuery {
        self.query.get()
    }

    pub fn with<T>(&self, f: impl FnOnce(&SearchQuery) -> T) -> T {
        self.query.with(f)
    }

    pub fn location(&self) -> Signal<String> {
        let query = self.query;
        Signal::derive(move || query.with(|q| q.location.clone()))
    }

    pub fn property_type(&self) -> Signal<String> {
        let query = self.query;
        Signal::derive(move || query.with(|q| q.property_type.clone()))
    }

    pub fn furnishing(&self) -> Signal<String> {
        let query = self.query;
        Signal::derive(move || query.with(|q| q.furnishing.clone()))
    }

    pub fn dates(&self) -> Signal<(Option<NaiveDate>, Option<NaiveDate>)> {
        let query = self.query;
        Signal::derive(move || query.with(|q| (q.check_in, q.check_out)))
    }

    pub fn guests(&self) -> Signal<Guests> {
        let query = self.query;
        Signal::derive(move || query.with(|q| q.guests))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn actions_touch_only_their_field() {
        let mut query = SearchQuery::default();
        reduce(&mut query, QueryAction::SetLocation("Mohali".into()));
        reduce(&mut query, QueryAction::SetPropertyType("PG".into()));
        assert_eq!(query.location, "Mohali");
        assert_eq!(query.property_type, "PG");
        assert_eq!(query.furnishing, "");
        assert_eq!(query.check_in, None);
    }

    #[test]
    fn reset_dates_clears_both_bounds() {
        let mut query = SearchQuery {
            check_in: Some(date(2025, 12, 12)),
            check_out: Some(date(2025, 12, 17)),
            ..SearchQuery::default()
        };
        reduce(&mut query, QueryAction::ResetDates);
        assert_eq!(query.check_in, None);
        assert_eq!(query.check_out, None);
    }

    #[test]
    fn reset_restores_the_default() {
        let mut query = SearchQuery {
            location: "Mohali".into(),
            guests: Guests { adults: 2, children: 0, infants: 0 },
            ..SearchQuery::default()
        };
        reduce(&mut query, QueryAction::Reset);
        assert_eq!(query, SearchQuery::default());
    }
}
