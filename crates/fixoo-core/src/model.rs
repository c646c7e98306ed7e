// crates/fixoo-core/src/model.rs

use crate::common::DirStats;
use crate::geo::Coordinate;
use crate::text::equals_folded;
use crate::traits::{NameMatch, StoreBackend};
use serde::{Deserialize, Serialize};

pub use crate::traits::DefaultBackend;

/// Raw weekly schedule as it comes from the JSON catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekScheduleRaw {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

/// Raw store structure as it comes from the JSON catalog.
///
/// NOTE: This type mirrors the external catalog format and is not exposed
/// from the public search API; it only feeds [`build_directory`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreRaw {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub email: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: f64,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(rename = "workingHours")]
    pub working_hours: WeekScheduleRaw,
}

pub type StoresRaw = Vec<StoreRaw>;

/// Fixed weekly opening-hours schedule.
///
/// Each weekday maps to an opening-hours string; the shipped catalog uses
/// `"Fermé"` as the closed sentinel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeekSchedule<B: StoreBackend> {
    pub monday: B::Str,
    pub tuesday: B::Str,
    pub wednesday: B::Str,
    pub thursday: B::Str,
    pub friday: B::Str,
    pub saturday: B::Str,
    pub sunday: B::Str,
}

/// Days of the week, used to index into a [`WeekSchedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days in calendar order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

/// A repair store in the normalized directory.
///
/// Immutable reference record: sourced once from the catalog, read-only for
/// the lifetime of a session, never mutated by the ranking engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Store<B: StoreBackend> {
    pub id: B::Str,
    pub name: B::Str,
    pub address: B::Str,
    pub city: B::Str,
    pub phone: B::Str,
    pub email: B::Str,
    pub latitude: B::Float,
    pub longitude: B::Float,
    /// Aggregate rating, bounded 0.0–5.0 by the catalog.
    pub rating: B::Float,
    /// Offered service tags. Order is irrelevant; matching is folded.
    /// Stored as owned strings so caches remain self-contained.
    pub services: Vec<String>,
    pub working_hours: WeekSchedule<B>,
}

/// Top-level directory structure.
///
/// Holds the full store catalog and provides search helpers. Constructed by
/// the loader module from the bundled JSON catalog (or any
/// [`StoreSource`](crate::loader::StoreSource)).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Directory<B: StoreBackend> {
    pub stores: Vec<Store<B>>,
}

/// Convenient alias for the default backend.
pub type DefaultDirectory = Directory<DefaultBackend>;
/// Convenient alias used in demos.
pub type StandardBackend = DefaultBackend;

/// Convert raw catalog data into a `Directory` using the given backend.
pub fn build_directory<B: StoreBackend>(raw: StoresRaw) -> Directory<B> {
    let stores = raw
        .into_iter()
        .map(|s| {
            let working_hours = WeekSchedule::<B> {
                monday: B::str_from(&s.working_hours.monday),
                tuesday: B::str_from(&s.working_hours.tuesday),
                wednesday: B::str_from(&s.working_hours.wednesday),
                thursday: B::str_from(&s.working_hours.thursday),
                friday: B::str_from(&s.working_hours.friday),
                saturday: B::str_from(&s.working_hours.saturday),
                sunday: B::str_from(&s.working_hours.sunday),
            };

            Store::<B> {
                id: B::str_from(&s.id),
                name: B::str_from(&s.name),
                address: B::str_from(&s.address),
                city: B::str_from(&s.city),
                phone: B::str_from(&s.phone),
                email: B::str_from(&s.email),
                latitude: B::float_from(s.latitude),
                longitude: B::float_from(s.longitude),
                rating: B::float_from(s.rating),
                services: s.services,
                working_hours,
            }
        })
        .collect();

    Directory { stores }
}

impl<B: StoreBackend> Directory<B> {
    /// Total number of stores in the directory.
    pub fn store_count(&self) -> usize {
        self.stores.len()
    }

    /// All stores in catalog order.
    pub fn stores(&self) -> &[Store<B>] {
        &self.stores
    }

    /// Find a store by its stable identifier (exact match).
    pub fn find_store_by_id(&self, id: &str) -> Option<&Store<B>> {
        // Linear scan is fine: catalogs are tens to low-hundreds of stores.
        self.stores.iter().find(|s| s.id.as_ref() == id)
    }

    /// Find a store by display name (accent- and case-insensitive).
    pub fn find_store_named(&self, name: &str) -> Option<&Store<B>> {
        self.stores.iter().find(|s| s.is_named(name))
    }

    /// Unique city names in first-seen catalog order.
    pub fn cities(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for store in &self.stores {
            let city = store.city();
            if !out.iter().any(|c| equals_folded(c, city)) {
                out.push(city);
            }
        }
        out
    }

    /// The universe of offered service tags, deduplicated in first-seen
    /// order. This feeds the service-filter checkboxes in consumers.
    pub fn services(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for store in &self.stores {
            for tag in &store.services {
                if !out.iter().any(|t| equals_folded(t, tag)) {
                    out.push(tag.as_str());
                }
            }
        }
        out
    }

    /// Aggregate statistics for the directory.
    pub fn stats(&self) -> DirStats {
        DirStats {
            stores: self.stores.len(),
            cities: self.cities().len(),
            services: self.services().len(),
        }
    }
}

impl<B: StoreBackend> Store<B> {
    pub fn id(&self) -> &str {
        self.id.as_ref()
    }

    /// Store display name. Always non-empty.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn address(&self) -> &str {
        self.address.as_ref()
    }

    pub fn city(&self) -> &str {
        self.city.as_ref()
    }

    pub fn phone(&self) -> &str {
        self.phone.as_ref()
    }

    pub fn email(&self) -> &str {
        self.email.as_ref()
    }

    /// Aggregate rating on the 0.0–5.0 scale.
    pub fn rating(&self) -> f64 {
        B::float_to_f64(self.rating)
    }

    /// Geographic position of the store.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(B::float_to_f64(self.latitude), B::float_to_f64(self.longitude))
    }

    /// Offered service tags.
    pub fn services(&self) -> &[String] {
        &self.services
    }

    /// True if the store offers a service matching `tag` (folded equality).
    pub fn offers_service(&self, tag: &str) -> bool {
        self.services.iter().any(|t| equals_folded(t, tag))
    }

    /// Opening-hours string for the given weekday.
    pub fn hours_on(&self, day: Weekday) -> &str {
        let h = &self.working_hours;
        match day {
            Weekday::Monday => h.monday.as_ref(),
            Weekday::Tuesday => h.tuesday.as_ref(),
            Weekday::Wednesday => h.wednesday.as_ref(),
            Weekday::Thursday => h.thursday.as_ref(),
            Weekday::Friday => h.friday.as_ref(),
            Weekday::Saturday => h.saturday.as_ref(),
            Weekday::Sunday => h.sunday.as_ref(),
        }
    }
}

impl<B: StoreBackend> NameMatch for Store<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}
