//! Route-entity mapper: plural URL path segments to singular entity names.
//!
//! Routing code dispatches on entity names while URLs carry plural
//! resource segments (`/dashboards`, `/companies`). The table below is
//! the single source of truth for that translation.

/// Known plural route segment -> singular entity name pairs.
const ROUTE_TABLE: &[(&str, &str)] = &[
    ("bookings", "booking"),
    ("cars", "car"),
    ("companies", "company"),
    ("dashboards", "dashboard"),
    ("locations", "location"),
    ("users", "user"),
];

/// Translate a plural route segment into its singular entity name.
///
/// Unknown segments are returned unchanged (identity fallback): callers
/// may pass already-singular or unknown segments, and failing hard here
/// would couple this utility to a closed set of routes. Total function,
/// never errors.
pub fn route_to_entity(route: &str) -> &str {
    ROUTE_TABLE
        .iter()
        .find(|(plural, _)| *plural == route)
        .map(|(_, entity)| *entity)
        .unwrap_or(route)
}

/// Whether the segment appears in the route table.
pub fn is_known_route(route: &str) -> bool {
    ROUTE_TABLE.iter().any(|(plural, _)| *plural == route)
}

/// All singular entity names the mapper knows about, in table order.
pub fn known_entities() -> impl Iterator<Item = &'static str> {
    ROUTE_TABLE.iter().map(|(_, entity)| *entity)
}
