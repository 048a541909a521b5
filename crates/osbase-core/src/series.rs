//! Legacy series registry
//!
//! Maps legacy short series names like `focal` to their OS/channel
//! descriptors and back. The tables are built once on first use; building
//! the reverse maps panics on a duplicate value, so a table mistake aborts
//! at startup instead of silently shadowing an entry.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::base::Base;
use crate::channel::Channel;
use crate::os::Os;
use crate::system::System;

/// Every legacy series and the base it denotes, as (series, os, channel).
const SERIES_TABLE: &[(&str, Os, &str)] = &[
    ("precise", Os::Ubuntu, "12.04/stable"),
    ("quantal", Os::Ubuntu, "12.10/stable"),
    ("raring", Os::Ubuntu, "13.04/stable"),
    ("saucy", Os::Ubuntu, "13.10/stable"),
    ("trusty", Os::Ubuntu, "14.04/stable"),
    ("utopic", Os::Ubuntu, "14.10/stable"),
    ("vivid", Os::Ubuntu, "15.04/stable"),
    ("wily", Os::Ubuntu, "15.10/stable"),
    ("xenial", Os::Ubuntu, "16.04/stable"),
    ("yakkety", Os::Ubuntu, "16.10/stable"),
    ("zesty", Os::Ubuntu, "17.04/stable"),
    ("artful", Os::Ubuntu, "17.10/stable"),
    ("bionic", Os::Ubuntu, "18.04/stable"),
    ("cosmic", Os::Ubuntu, "18.10/stable"),
    ("disco", Os::Ubuntu, "19.04/stable"),
    ("eoan", Os::Ubuntu, "19.10/stable"),
    ("focal", Os::Ubuntu, "20.04/stable"),
    ("groovy", Os::Ubuntu, "20.10/stable"),
    ("hirsute", Os::Ubuntu, "21.04/stable"),
    ("win2008r2", Os::Windows, "win2008r2/stable"),
    ("win2012hvr2", Os::Windows, "win2012hvr2/stable"),
    ("win2012hv", Os::Windows, "win2012hv/stable"),
    ("win2012r2", Os::Windows, "win2012r2/stable"),
    ("win2012", Os::Windows, "win2012/stable"),
    ("win2016", Os::Windows, "win2016/stable"),
    ("win2016hv", Os::Windows, "win2016hv/stable"),
    ("win2016nano", Os::Windows, "win2016nano/stable"),
    ("win2019", Os::Windows, "win2019/stable"),
    ("win7", Os::Windows, "win7/stable"),
    ("win8", Os::Windows, "win8/stable"),
    ("win81", Os::Windows, "win81/stable"),
    ("win10", Os::Windows, "win10/stable"),
    ("centos7", Os::Centos, "centos7/stable"),
    ("centos8", Os::Centos, "centos8/stable"),
    ("opensuseleap", Os::Opensuse, "opensuse42/stable"),
    ("genericlinux", Os::GenericLinux, "latest/stable"),
];

static SERIES_TO_BASE: Lazy<HashMap<&'static str, Base>> = Lazy::new(|| {
    SERIES_TABLE
        .iter()
        .map(|(series, os, channel)| (*series, Base::new(*os, Channel::must_parse(channel))))
        .collect()
});

static BASE_TO_SERIES: Lazy<HashMap<Base, &'static str>> = Lazy::new(|| {
    let mut reverse = HashMap::new();
    for (series, base) in SERIES_TO_BASE.iter() {
        if let Some(existing) = reverse.insert(base.clone(), *series) {
            panic!("series {series:?} and {existing:?} map to the same base {base}");
        }
    }
    reverse
});

static SERIES_TO_SYSTEM: Lazy<HashMap<&'static str, System>> = Lazy::new(|| {
    SERIES_TO_BASE
        .iter()
        .map(|(series, base)| {
            let system = System {
                os: base.name.clone(),
                channel: base.channel.clone(),
                resource: String::new(),
            };
            (*series, system)
        })
        .collect()
});

static SYSTEM_TO_SERIES: Lazy<HashMap<System, &'static str>> = Lazy::new(|| {
    let mut reverse = HashMap::new();
    for (series, system) in SERIES_TO_SYSTEM.iter() {
        if let Some(existing) = reverse.insert(system.clone(), *series) {
            panic!("series {series:?} and {existing:?} map to the same system {system}");
        }
    }
    reverse
});

/// Base denoted by a legacy series name.
pub fn base_for_series(series: &str) -> Option<&'static Base> {
    SERIES_TO_BASE.get(series)
}

/// Legacy series name registered for a base, if any.
pub fn series_for_base(base: &Base) -> Option<&'static str> {
    BASE_TO_SERIES.get(base).copied()
}

/// System denoted by a legacy series name.
pub fn system_for_series(series: &str) -> Option<&'static System> {
    SERIES_TO_SYSTEM.get(series)
}

/// Legacy series name registered for a system, if any.
pub fn series_for_system(system: &System) -> Option<&'static str> {
    SYSTEM_TO_SERIES.get(system).copied()
}

/// All registered legacy series names.
pub fn all_series() -> impl Iterator<Item = &'static str> {
    SERIES_TABLE.iter().map(|(series, _, _)| *series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_series_round_trips_through_reverse_map() {
        for series in all_series() {
            let base = base_for_series(series).unwrap();
            assert_eq!(series_for_base(base), Some(series));
            let system = system_for_series(series).unwrap();
            assert_eq!(series_for_system(system), Some(series));
        }
    }

    #[test]
    fn known_entries() {
        let focal = base_for_series("focal").unwrap();
        assert_eq!(focal.name, "ubuntu");
        assert_eq!(
            focal.channel,
            Some(Channel::must_parse("20.04/stable"))
        );

        let generic = base_for_series("genericlinux").unwrap();
        assert_eq!(generic.channel, Some(Channel::must_parse("stable")));

        assert!(base_for_series("mythicalos").is_none());
    }

    #[test]
    fn registered_bases_are_normalized() {
        for series in all_series() {
            let channel = base_for_series(series).unwrap().channel.as_ref().unwrap();
            assert_eq!(&channel.clean(), channel, "series {series} not normalized");
        }
    }
}
