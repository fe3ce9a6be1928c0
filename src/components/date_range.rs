//! Two-month date-range picker with guest counters, shown inside the search
//! bar's date popover. First click sets check-in, second sets check-out; a
//! click before the current start restarts the range.

use chrono::{Datelike, Months, NaiveDate};
use leptos::*;

use crate::components::counter::Counter;
use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use crate::context::{QueryAction, SearchCtx};
use crate::model::Guests;

/// Range transition for a click on `clicked`.
pub fn next_range(
    current: (Option<NaiveDate>, Option<NaiveDate>),
    clicked: NaiveDate,
) -> (Option<NaiveDate>, Option<NaiveDate>) {
    match current {
        (Some(start), None) if clicked >= start => (Some(start), Some(clicked)),
        _ => (Some(clicked), None),
    }
}

/// Day cells for one month, padded with `None` so the first row aligns on
/// Sunday.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid first of month");
    let padding = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(year, month);
    let mut cells: Vec<Option<NaiveDate>> = vec![None; padding];
    cells.extend((1..=days).map(|day| NaiveDate::from_ymd_opt(year, month, day)));
    cells
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid first of month");
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("valid first of month")
}

fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .expect("browser date is a valid calendar date")
}

#[component]
pub fn DateRange() -> impl IntoView {
    let ctx = SearchCtx::expect();
    let dates = ctx.dates();
    let guests = ctx.guests();
    let today = today();
    let visible_month = create_rw_signal(first_of_month(today));

    let pick = move |clicked: NaiveDate| {
        let (check_in, check_out) = next_range(dates.get_untracked(), clicked);
        ctx.dispatch(QueryAction::SetDates { check_in, check_out });
    };

    let set_guests = move |update: fn(&mut Guests, u32), count: u32| {
        let mut current = guests.get_untracked();
        update(&mut current, count);
        ctx.dispatch(QueryAction::SetGuests(current));
    };

    let month_view = move |offset: u32| {
        let month_start = visible_month
            .get()
            .checked_add_months(Months::new(offset))
            .unwrap_or_else(|| visible_month.get());
        let title = month_start.format("%B %Y").to_string();
        let cells = month_grid(month_start.year(), month_start.month())
            .into_iter()
            .map(|cell| match cell {
                None => view! { <div class="h-10"></div> }.into_view(),
                Some(day) => {
                    let disabled = day < today;
                    let class = move || {
                        let (check_in, check_out) = dates.get();
                        let selected = Some(day) == check_in || Some(day) == check_out;
                        let in_range = match (check_in, check_out) {
                            (Some(start), Some(end)) => day > start && day < end,
                            _ => false,
                        };
                        if selected {
                            "h-10 w-10 rounded-full bg-gray-900 text-white font-semibold"
                        } else if in_range {
                            "h-10 w-10 rounded-full bg-gray-100"
                        } else if disabled {
                            "h-10 w-10 rounded-full text-gray-300 cursor-not-allowed"
                        } else {
                            "h-10 w-10 rounded-full hover:bg-gray-100"
                        }
                    };
                    view! {
                        <button
                            type="button"
                            class=class
                            disabled=disabled
                            on:click=move |_| pick(day)
                        >
                            {day.day()}
                        </button>
                    }
                    .into_view()
                }
            })
            .collect::<Vec<_>>();
        view! {
            <div class="w-72">
                <div class="text-center font-semibold mb-3">{title}</div>
                <div class="grid grid-cols-7 gap-1 text-xs text-gray-500 mb-2">
                    {["S", "M", "T", "W", "T", "F", "S"]
                        .iter()
                        .map(|day| view! { <div class="text-center">{*day}</div> })
                        .collect::<Vec<_>>()}
                </div>
                <div class="grid grid-cols-7 gap-1 text-sm">{cells}</div>
            </div>
        }
    };

    view! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <button
                    type="button"
                    class="p-2 rounded-full hover:bg-gray-100"
                    aria-label="Previous month"
                    on:click=move |_| {
                        visible_month.update(|month| {
                            if let Some(previous) = month.checked_sub_months(Months::new(1)) {
                                *month = previous;
                            }
                        });
                    }
                >
                    <ChevronLeftIcon class="h-5 w-5 text-gray-700" />
                </button>
                <button
                    type="button"
                    class="p-2 rounded-full hover:bg-gray-100"
                    aria-label="Next month"
                    on:click=move |_| {
                        visible_month.update(|month| {
                            if let Some(next) = month.checked_add_months(Months::new(1)) {
                                *month = next;
                            }
                        });
                    }
                >
                    <ChevronRightIcon class="h-5 w-5 text-gray-700" />
                </button>
            </div>
            <div class="flex gap-8">
                {move || month_view(0)}
                {move || month_view(1)}
            </div>
            <div class="mt-6 border-t border-gray-200 divide-y divide-gray-100">
                <Counter
                    label="Adults"
                    sub="Ages 13 or above"
                    value=Signal::derive(move || guests.get().adults)
                    on_change=move |count| set_guests(|guests, count| guests.adults = count, count)
                />
                <Counter
                    label="Children"
                    sub="Ages 2-12"
                    value=Signal::derive(move || guests.get().children)
                    on_change=move |count| set_guests(|guests, count| guests.children = count, count)
                />
                <Counter
                    label="Infants"
                    sub="Under 2"
                    value=Signal::derive(move || guests.get().infants)
                    on_change=move |count| set_guests(|guests, count| guests.infants = count, count)
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_click_sets_check_in() {
        let picked = next_range((None, None), date(2025, 12, 12));
        assert_eq!(picked, (Some(date(2025, 12, 12)), None));
    }

    #[test]
    fn second_click_after_start_sets_check_out() {
        let start = date(2025, 12, 12);
        let picked = next_range((Some(start), None), date(2025, 12, 17));
        assert_eq!(picked, (Some(start), Some(date(2025, 12, 17))));
    }

    #[test]
    fn click_before_start_restarts_the_range() {
        let picked = next_range((Some(date(2025, 12, 12)), None), date(2025, 12, 10));
        assert_eq!(picked, (Some(date(2025, 12, 10)), None));
    }

    #[test]
    fn click_on_a_complete_range_restarts() {
        let current = (Some(date(2025, 12, 12)), Some(date(2025, 12, 17)));
        let picked = next_range(current, date(2025, 12, 20));
        assert_eq!(picked, (Some(date(2025, 12, 20)), None));
    }

    #[test]
    fn same_day_range_is_allowed() {
        let start = date(2025, 12, 12);
        assert_eq!(next_range((Some(start), None), start), (Some(start), Some(start)));
    }

    #[test]
    fn grid_pads_to_the_first_weekday() {
        // December 2025 starts on a Monday.
        let grid = month_grid(2025, 12);
        assert_eq!(grid.iter().take_while(|cell| cell.is_none()).count(), 1);
        assert_eq!(grid.iter().filter(|cell| cell.is_some()).count(), 31);
    }

    #[test]
    fn leap_february_has_29_cells() {
        let grid = month_grid(2024, 2);
        assert_eq!(grid.iter().filter(|cell| cell.is_some()).count(), 29);
    }
}
