//! Behavioural tests for resolving zone polygons per aspect.

use geo::Coord;
use habitat_core::{Aspect, MatchMethod, ZoneIndex, ZonePolygon};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

/// Zone label and match method resolved for each aspect.
type Resolved = Vec<(Aspect, Option<(String, MatchMethod)>)>;

fn rectangle(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Vec<Coord<f64>> {
    vec![
        Coord { x: min_lon, y: min_lat },
        Coord { x: min_lon, y: max_lat },
        Coord { x: max_lon, y: max_lat },
        Coord { x: max_lon, y: min_lat },
    ]
}

#[fixture]
fn zones() -> RefCell<ZoneIndex> {
    RefCell::new(ZoneIndex::default())
}

#[fixture]
fn resolved() -> RefCell<Resolved> {
    RefCell::new(Vec::new())
}

#[given("crime zones for the west and east halves of the study area")]
fn given_crime_halves(#[from(zones)] zones: &RefCell<ZoneIndex>) {
    *zones.borrow_mut() = ZoneIndex::new([
        ZonePolygon::new(
            Aspect::CrimeRate,
            "west",
            rectangle(-74.02, 40.70, -73.98, 40.76),
            3.2,
        ),
        ZonePolygon::new(
            Aspect::CrimeRate,
            "east",
            rectangle(-73.98, 40.70, -73.94, 40.76),
            5.9,
        ),
    ]);
}

#[given("two overlapping rent zones")]
fn given_overlapping_rent(#[from(zones)] zones: &RefCell<ZoneIndex>) {
    *zones.borrow_mut() = ZoneIndex::new([
        ZonePolygon::new(
            Aspect::MedianRent,
            "midtown",
            rectangle(-74.00, 40.74, -73.96, 40.78),
            5200.0,
        ),
        ZonePolygon::new(
            Aspect::MedianRent,
            "east side",
            rectangle(-73.98, 40.74, -73.94, 40.78),
            4700.0,
        ),
    ]);
}

fn classify_at(zones: &RefCell<ZoneIndex>, resolved: &RefCell<Resolved>, lat: f64, lon: f64) {
    let zones = zones.borrow();
    *resolved.borrow_mut() = zones
        .classify(lat, lon)
        .into_iter()
        .map(|(aspect, found)| {
            (
                aspect,
                found.map(|m| (m.polygon.zone_type.clone(), m.method)),
            )
        })
        .collect();
}

#[when("I classify a point in the west half")]
fn when_west(#[from(zones)] zones: &RefCell<ZoneIndex>, #[from(resolved)] resolved: &RefCell<Resolved>) {
    classify_at(zones, resolved, 40.73, -74.00);
}

#[when("I classify a point inside both rent zones")]
fn when_overlap(
    #[from(zones)] zones: &RefCell<ZoneIndex>,
    #[from(resolved)] resolved: &RefCell<Resolved>,
) {
    classify_at(zones, resolved, 40.76, -73.97);
}

#[when("I classify a point just east of the study area")]
fn when_outside(
    #[from(zones)] zones: &RefCell<ZoneIndex>,
    #[from(resolved)] resolved: &RefCell<Resolved>,
) {
    classify_at(zones, resolved, 40.73, -73.92);
}

fn resolved_for(resolved: &RefCell<Resolved>, aspect: Aspect) -> Option<(String, MatchMethod)> {
    resolved
        .borrow()
        .iter()
        .find(|(candidate, _)| *candidate == aspect)
        .and_then(|(_, found)| found.clone())
}

#[then("the crime aspect resolves to the west zone by containment")]
fn then_west(#[from(resolved)] resolved: &RefCell<Resolved>) {
    assert_eq!(
        resolved_for(resolved, Aspect::CrimeRate),
        Some(("west".to_owned(), MatchMethod::Contained))
    );
}

#[then("the rent aspect resolves to the first listed zone")]
fn then_first_listed(#[from(resolved)] resolved: &RefCell<Resolved>) {
    assert_eq!(
        resolved_for(resolved, Aspect::MedianRent),
        Some(("midtown".to_owned(), MatchMethod::Contained))
    );
}

#[then("the crime aspect resolves to the east zone by nearest centroid")]
fn then_east_fallback(#[from(resolved)] resolved: &RefCell<Resolved>) {
    assert_eq!(
        resolved_for(resolved, Aspect::CrimeRate),
        Some(("east".to_owned(), MatchMethod::NearestCentroid))
    );
}

#[then("the school aspect is unresolved")]
fn then_school_missing(#[from(resolved)] resolved: &RefCell<Resolved>) {
    assert_eq!(resolved.borrow().len(), Aspect::ALL.len());
    assert_eq!(resolved_for(resolved, Aspect::SchoolQuality), None);
}

#[scenario(path = "tests/features/zone_classification.feature", index = 0)]
fn scenario_contained(zones: RefCell<ZoneIndex>, resolved: RefCell<Resolved>) {
    let _ = (zones, resolved);
}

#[scenario(path = "tests/features/zone_classification.feature", index = 1)]
fn scenario_overlap(zones: RefCell<ZoneIndex>, resolved: RefCell<Resolved>) {
    let _ = (zones, resolved);
}

#[scenario(path = "tests/features/zone_classification.feature", index = 2)]
fn scenario_fallback(zones: RefCell<ZoneIndex>, resolved: RefCell<Resolved>) {
    let _ = (zones, resolved);
}

#[scenario(path = "tests/features/zone_classification.feature", index = 3)]
fn scenario_missing_aspect(zones: RefCell<ZoneIndex>, resolved: RefCell<Resolved>) {
    let _ = (zones, resolved);
}
