//! Conversion between orders and their form representation

use super::constraints::{FieldConstraint, ORDER_FORM_CONSTRAINTS};
use super::date_time::{format_date_time, parse_date_time, ParsedDateTime};
use super::raw_value::{FormDefaults, OrderFormState};
use crate::state::{Clock, Order, OrderField, SystemClock};
use chrono::{DateTime, Utc};

/// Maps [`Order`] entities onto [`OrderFormState`] and back.
///
/// The service is stateless apart from the clock it reads when injecting
/// creation-time defaults.
#[derive(Debug, Clone, Default)]
pub struct OrderFormService<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> OrderFormService<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Time source shared with callers that stamp saved records
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Defaults for a brand-new record; reads the clock on every call
    pub fn build_defaults(&self) -> FormDefaults {
        let now = self.clock.now();
        FormDefaults {
            id: None,
            created_date: now,
            last_modified_date: now,
        }
    }

    /// Build the form value for `order`.
    ///
    /// New records (no id) get the defaults for any timestamp they lack;
    /// records being edited are taken as given.
    pub fn to_form_state(&self, order: &Order) -> OrderFormState {
        let (created_date, last_modified_date) = if order.is_new() {
            let defaults = self.build_defaults();
            (
                order.created_date.or(Some(defaults.created_date)),
                order
                    .last_modified_date
                    .or(Some(defaults.last_modified_date)),
            )
        } else {
            (order.created_date, order.last_modified_date)
        };

        tracing::debug!(id = ?order.id, new = order.is_new(), "Converting order to form state");

        OrderFormState {
            id: order.id,
            width: order.width,
            height: order.height,
            status: order.status,
            file_name: order.file_name.clone(),
            comment: order.comment.clone(),
            created_by: order.created_by.clone(),
            created_date: created_date.as_ref().map(format_date_time),
            last_modified_by: order.last_modified_by.clone(),
            last_modified_date: last_modified_date.as_ref().map(format_date_time),
        }
    }

    /// Build the entity to submit from a form value.
    ///
    /// Timestamps that are missing or cannot be parsed come back as `None`.
    pub fn to_entity(&self, state: &OrderFormState) -> Order {
        Order {
            id: state.id,
            width: state.width,
            height: state.height,
            status: state.status,
            file_name: state.file_name.clone(),
            comment: state.comment.clone(),
            created_by: state.created_by.clone(),
            created_date: read_date(OrderField::CreatedDate, state.created_date.as_deref()),
            last_modified_by: state.last_modified_by.clone(),
            last_modified_date: read_date(
                OrderField::LastModifiedDate,
                state.last_modified_date.as_deref(),
            ),
        }
    }

    /// Form value used to reset an open form back to `order`
    pub fn reset(&self, order: &Order) -> OrderFormState {
        self.to_form_state(order)
    }

    /// Validation rules the form layer is expected to enforce
    pub fn constraints(&self) -> &'static [FieldConstraint] {
        ORDER_FORM_CONSTRAINTS
    }
}

fn read_date(field: OrderField, text: Option<&str>) -> Option<DateTime<Utc>> {
    let parsed = parse_date_time(text);
    if let ParsedDateTime::Invalid(ref raw) = parsed {
        tracing::warn!(field = %field, value = %raw, "Discarding unparseable date");
    }
    parsed.into_option()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FixedClock, MockClock, OrderStatus};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 5, 7, h, m, 0).unwrap()
    }

    fn service() -> OrderFormService<FixedClock> {
        OrderFormService::new(FixedClock(Utc.with_ymd_and_hms(2024, 2, 29, 12, 30, 45).unwrap()))
    }

    fn sample_with_required_data() -> Order {
        Order {
            id: Some(47761),
            status: Some(OrderStatus::InProgress),
            created_by: Some("New Parks Handcrafted".to_string()),
            ..Default::default()
        }
    }

    fn sample_with_full_data() -> Order {
        Order {
            id: Some(8122),
            width: Some(91093),
            height: Some(25173),
            status: Some(OrderStatus::InProgress),
            file_name: Some("capacitor".to_string()),
            comment: Some("Multi-layered secured".to_string()),
            created_by: Some("Dynamic".to_string()),
            created_date: Some(at(16, 24)),
            last_modified_by: Some("copying Frozen Shoes".to_string()),
            last_modified_date: Some(at(19, 7)),
        }
    }

    mod defaults {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_build_defaults_uses_clock_once() {
            let instant = at(9, 15);
            let mut clock = MockClock::new();
            clock.expect_now().times(1).return_const(instant);
            let service = OrderFormService::new(clock);

            let defaults = service.build_defaults();

            assert_eq!(defaults.id, None);
            assert_eq!(defaults.created_date, instant);
            assert_eq!(defaults.last_modified_date, instant);
        }

        #[test]
        fn test_build_defaults_is_not_memoized() {
            let mut clock = MockClock::new();
            let mut seq = mockall::Sequence::new();
            clock
                .expect_now()
                .times(1)
                .in_sequence(&mut seq)
                .return_const(at(9, 15));
            clock
                .expect_now()
                .times(1)
                .in_sequence(&mut seq)
                .return_const(at(9, 16));
            let service = OrderFormService::new(clock);

            assert_eq!(service.build_defaults().created_date, at(9, 15));
            assert_eq!(service.build_defaults().created_date, at(9, 16));
        }

        #[test]
        fn test_new_record_gets_same_formatted_instant() {
            let state = service().to_form_state(&Order::default());

            assert_eq!(state.id, None);
            assert_eq!(state.status, None);
            assert_eq!(state.created_date.as_deref(), Some("2024-02-29T12:30"));
            assert_eq!(state.created_date, state.last_modified_date);
        }

        #[test]
        fn test_new_record_keeps_supplied_values() {
            let order = Order {
                status: Some(OrderStatus::Available),
                created_by: Some("Savings".to_string()),
                created_date: Some(at(8, 0)),
                ..Default::default()
            };
            let state = service().to_form_state(&order);

            assert_eq!(state.status, Some(OrderStatus::Available));
            assert_eq!(state.created_by.as_deref(), Some("Savings"));
            assert_eq!(state.created_date.as_deref(), Some("2023-05-07T08:00"));
            assert_eq!(state.last_modified_date.as_deref(), Some("2024-02-29T12:30"));
        }

        #[test]
        fn test_existing_record_never_reads_clock() {
            let mut clock = MockClock::new();
            clock.expect_now().never();
            let service = OrderFormService::new(clock);

            let state = service.to_form_state(&sample_with_required_data());

            assert_eq!(state.created_date, None);
        }
    }

    mod to_form_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_data_leaves_optional_fields_absent() {
            let state = service().to_form_state(&sample_with_required_data());

            assert_eq!(
                state,
                OrderFormState {
                    id: Some(47761),
                    status: Some(OrderStatus::InProgress),
                    created_by: Some("New Parks Handcrafted".to_string()),
                    ..Default::default()
                }
            );
        }

        #[test]
        fn test_full_data_formats_dates() {
            let state = service().to_form_state(&sample_with_full_data());

            assert_eq!(state.created_date.as_deref(), Some("2023-05-07T16:24"));
            assert_eq!(state.last_modified_date.as_deref(), Some("2023-05-07T19:07"));
            assert_eq!(state.comment.as_deref(), Some("Multi-layered secured"));
        }

        #[test]
        fn test_is_idempotent_for_existing_records() {
            let service = OrderFormService::new(SystemClock);
            let order = sample_with_full_data();
            assert_eq!(service.to_form_state(&order), service.to_form_state(&order));
        }

        #[test]
        fn test_reset_matches_to_form_state() {
            let service = service();
            let order = sample_with_full_data();
            assert_eq!(service.reset(&order), service.to_form_state(&order));
        }
    }

    mod to_entity {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_round_trip_full_data() {
            let service = service();
            let order = sample_with_full_data();
            assert_eq!(service.to_entity(&service.to_form_state(&order)), order);
        }

        #[test]
        fn test_round_trip_truncates_to_minute() {
            let service = service();
            let order = Order {
                id: Some(1),
                created_date: Some(Utc.with_ymd_and_hms(2023, 5, 7, 21, 11, 42).unwrap()),
                ..Default::default()
            };
            let back = service.to_entity(&service.to_form_state(&order));
            assert_eq!(back.created_date, Some(at(21, 11)));
        }

        #[test]
        fn test_parses_fixed_format() {
            let state = OrderFormState {
                created_date: Some("2023-05-07T21:11".to_string()),
                ..Default::default()
            };
            let order = service().to_entity(&state);
            assert_eq!(order.created_date, Some(at(21, 11)));
            assert_eq!(order.last_modified_date, None);
        }

        #[test]
        fn test_unparseable_date_becomes_none() {
            let state = OrderFormState {
                id: Some(57558),
                created_date: Some("07/05/2023 21:11".to_string()),
                last_modified_date: Some(String::new()),
                ..Default::default()
            };
            let order = service().to_entity(&state);
            assert_eq!(order.id, Some(57558));
            assert_eq!(order.created_date, None);
            assert_eq!(order.last_modified_date, None);
        }
    }

    #[test]
    fn test_clock_is_exposed() {
        let service = service();
        assert_eq!(
            service.clock().now(),
            Utc.with_ymd_and_hms(2024, 2, 29, 12, 30, 45).unwrap()
        );
    }

    #[test]
    fn test_constraints_expose_table() {
        let service = service();
        assert_eq!(service.constraints().len(), OrderField::ALL.len());
    }
}
