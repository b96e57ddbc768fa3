//! Locations and the navigation graph.

use serde::Serialize;

use super::dialogue::Speaker;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationId {
    Home,
    Downtown,
    Industrial,
    Bar,
    Gym,
    Library,
    Conbini,
    CallCenter,
    Gambling,
    Recruiter,
}

pub const ALL_LOCATIONS: [LocationId; 10] = [
    LocationId::Home,
    LocationId::Downtown,
    LocationId::Industrial,
    LocationId::Bar,
    LocationId::Gym,
    LocationId::Library,
    LocationId::Conbini,
    LocationId::CallCenter,
    LocationId::Gambling,
    LocationId::Recruiter,
];

pub struct LocationInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// Reachable locations, in display order.
    pub connections: &'static [LocationId],
    /// Who speaks when you arrive, if anyone.
    pub ambient: Option<Speaker>,
}

pub fn location_info(id: LocationId) -> LocationInfo {
    use LocationId as L;
    match id {
        L::Home => LocationInfo {
            name: "Home",
            description: "Your small apartment. A place to rest and plan.",
            connections: &[L::Downtown],
            ambient: Some(Speaker::You),
        },
        L::Downtown => LocationInfo {
            name: "Downtown",
            description: "Bright signs, offices, shops. Many paths start here.",
            connections: &[L::Home, L::Industrial, L::Bar, L::Library, L::Recruiter, L::Gambling],
            ambient: Some(Speaker::You),
        },
        L::Industrial => LocationInfo {
            name: "Industrial Area",
            description: "Warehouses and work. Less shine, more sweat.",
            connections: &[L::Downtown, L::Gym, L::Conbini, L::CallCenter],
            ambient: Some(Speaker::You),
        },
        L::Bar => LocationInfo {
            name: "Bar",
            description: "Neon lights and quiet music. You can relax and boost your charm.",
            connections: &[L::Downtown],
            ambient: Some(Speaker::Bartender),
        },
        L::Gym => LocationInfo {
            name: "Gym",
            description: "Metal, sweat, and focus. Endurance is built here.",
            connections: &[L::Industrial],
            ambient: Some(Speaker::Trainer),
        },
        L::Library => LocationInfo {
            name: "Library",
            description: "Quiet stacks of books. A good place to study.",
            connections: &[L::Downtown],
            ambient: Some(Speaker::Librarian),
        },
        L::Conbini => LocationInfo {
            name: "Convenience Store",
            description: "Snacks, drinks, and endless shelf-stacking.",
            connections: &[L::Industrial],
            ambient: None,
        },
        L::CallCenter => LocationInfo {
            name: "Call Center",
            description: "Headsets and scripts. People call with all kinds of problems.",
            connections: &[L::Industrial],
            ambient: None,
        },
        L::Gambling => LocationInfo {
            name: "Gambling Den",
            description: "Low light, tense faces. Big wins or bad nights.",
            connections: &[L::Downtown],
            ambient: None,
        },
        L::Recruiter => LocationInfo {
            name: "Recruiter Office",
            description: "A clean office. Here you climb the interview ladder.",
            connections: &[L::Downtown],
            ambient: Some(Speaker::Recruiter),
        },
    }
}

/// Legal destinations from `id`, in display order.
pub fn neighbors(id: LocationId) -> &'static [LocationId] {
    location_info(id).connections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downtown_is_the_hub() {
        assert_eq!(
            neighbors(LocationId::Downtown),
            &[
                LocationId::Home,
                LocationId::Industrial,
                LocationId::Bar,
                LocationId::Library,
                LocationId::Recruiter,
                LocationId::Gambling,
            ]
        );
    }

    #[test]
    fn industrial_branch() {
        assert_eq!(
            neighbors(LocationId::Industrial),
            &[
                LocationId::Downtown,
                LocationId::Gym,
                LocationId::Conbini,
                LocationId::CallCenter,
            ]
        );
        assert_eq!(neighbors(LocationId::Gym), &[LocationId::Industrial]);
    }

    #[test]
    fn every_edge_has_a_way_back() {
        for from in ALL_LOCATIONS {
            for &to in neighbors(from) {
                assert!(
                    neighbors(to).contains(&from),
                    "{:?} -> {:?} is one-way",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn no_self_loops_and_names_present() {
        for id in ALL_LOCATIONS {
            let info = location_info(id);
            assert!(!info.name.is_empty());
            assert!(!info.description.is_empty());
            assert!(!info.connections.contains(&id));
        }
    }
}
