//! Real Las Vegas / Henderson places for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap.

use journey_planner::haversine::Coordinate;
use journey_planner::traits::Stop;

/// A named place, routed by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }
}

impl Stop for Place {
    type Id = &'static str;

    fn id(&self) -> &Self::Id {
        &self.name
    }

    fn location(&self) -> Coordinate {
        Coordinate {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// Where the traveler stands when planning starts.
pub const CURRENT_LOCATION: Coordinate = Coordinate {
    lat: 36.1147,
    lng: -115.1728,
};

pub const STRIP: &[Place] = &[
    Place::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Place::new("MGM Grand", 36.1023654, -115.1688720),
    Place::new("Bellagio", 36.1126, -115.1767),
    Place::new("Caesars Palace", 36.1162, -115.1745),
    Place::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Place::new("Public House", 36.1219193, -115.1689317),
    Place::new("Brooklyn Bowl", 36.1175388, -115.1695094),
    Place::new("Gordon Ramsay BurGR", 36.1107195, -115.1720818),
    Place::new("Grand Lux Cafe", 36.1216416, -115.1685024),
    Place::new("Il Fornaio", 36.1024474, -115.1740110),
];

pub const HENDERSON: &[Place] = &[
    Place::new("I Love Sushi Henderson", 35.9916660, -115.1028343),
    Place::new("Islander's Grill", 36.0335058, -114.9856162),
    Place::new("Naga", 36.0137634, -114.9928676),
    Place::new("RibCage", 35.9949754, -115.0999810),
    Place::new("Green Valley Ranch Area", 36.0308, -115.0825),
    Place::new("Sunset Station Area", 36.0614, -115.0631),
];

pub const EAST_SIDE: &[Place] = &[
    Place::new("Pei Wei Town Square", 36.0810469, -115.1472694),
    Place::new("Hello Tokyo", 36.1161627, -115.0902096),
    Place::new("Tomo Sushi", 36.0992464, -115.1142123),
    Place::new("Sushi Twister", 36.1007300, -115.0526259),
    Place::new("Chuck Wagon Restaurant", 36.1072491, -115.0593482),
    Place::new("Roma Pizza", 36.1012461, -115.0753039),
];

pub fn all_places() -> Vec<Place> {
    let mut all = Vec::with_capacity(STRIP.len() + HENDERSON.len() + EAST_SIDE.len());
    all.extend_from_slice(STRIP);
    all.extend_from_slice(HENDERSON);
    all.extend_from_slice(EAST_SIDE);
    all
}

/// Places spread across the metro area, listed in a deliberately poor order
/// (alternating between far-apart neighborhoods).
pub fn zigzag_places() -> Vec<Place> {
    vec![
        STRIP[0].clone(),
        HENDERSON[1].clone(),
        STRIP[1].clone(),
        EAST_SIDE[3].clone(),
        STRIP[2].clone(),
        HENDERSON[0].clone(),
        EAST_SIDE[0].clone(),
        HENDERSON[4].clone(),
    ]
}
