//! Reference odds for the Smackoff 30 field, in declaration order.

use crate::odds::Field;

/// Seed used for the "Predict Smackoff 30 Winner" draw.
pub const SMACKOFF_SEED: u64 = 30;

pub const SMACKOFF_30: [(&str, i64); 35] = [
    ("Brad_in_Corona", 500),
    ("Mark_in_Boston", 600),
    ("Mark_in_Hollywood", 700),
    ("Leff_in_Laguna", 800),
    ("Sean_the_Cablinasian", 900),
    ("Kaleb_in_Green_Bay", 1300),
    ("Vic_in_NoCal", 1500),
    ("Rick_in_Buffalo", 1500),
    ("V_in_the_Fee", 3200),
    ("Mike_in_Indy", 3400),
    ("Iafrate", 3800),
    ("Silk_Brah", 4200),
    ("Benny_in_Wisco", 5800),
    ("Jeff_from_Richmond", 5800),
    ("Matt_in_LA", 7000),
    ("James_in_Portland", 7000),
    ("Amber_in_Portland", 7000),
    ("Dan_in_Denver", 8000),
    ("KC_in_LA", 8000),
    ("Steve_Carbone", 8500),
    ("Jason_in_Fullerton", 8800),
    ("Gail_in_Valencia", 8800),
    ("Jeff_in_Southfield", 9000),
    ("Nick_Caserio", 9500),
    ("Bode_in_Pearland", 10000),
    ("John_in_New_York", 10000),
    ("Drizzle_in_Wichita", 10000),
    ("Rich_in_Philly", 10000),
    ("Dion_Dawkins", 10000),
    ("John_in_Little_Rock", 10000),
    ("Eliah_Drinkwitz", 10000),
    ("Steve_in_Green_Bay", 10000),
    ("Mike_in_Studio_City", 10000),
    ("Mike_in_the_Bay", 10000),
    ("Dre_in_Providence", 10000),
];

pub fn smackoff_30() -> Field {
    Field::from(&SMACKOFF_30[..])
}
