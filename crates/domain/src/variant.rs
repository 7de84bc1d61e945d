use derive_more::Deref;
use log::debug;
use uuid::Uuid;

use crate::{Error, Name, OneRepMaxEntry, Percent, ShortName};

/// `round(main_one_rm * percent / 100)`
#[must_use]
pub fn derive_variant_one_rep_max(main_one_rm: f32, percent: Percent) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let one_rm = (main_one_rm * f32::from(percent) / 100.0).round().max(0.0) as u32;
    one_rm
}

/// Accessory lift whose one rep max is a share of a main lift's one rep max.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub id: VariantID,
    pub name: Name,
    /// Short name of the main lift, resolved on every recomputation.
    pub main: Option<ShortName>,
    pub percent: Option<Percent>,
    /// Undefined while the main lift cannot be resolved.
    pub one_rm: Option<u32>,
}

impl Variant {
    #[must_use]
    pub fn new(
        id: VariantID,
        name: Name,
        main: Option<ShortName>,
        percent: Option<Percent>,
    ) -> Self {
        Self {
            id,
            name,
            main,
            percent,
            one_rm: None,
        }
    }

    pub fn apply(&mut self, field: VariantField) {
        match field {
            VariantField::Name(name) => self.name = name,
            VariantField::Main(main) => self.main = Some(main),
            VariantField::Percent(percent) => self.percent = Some(percent),
        }
    }

    /// Recomputes the one rep max from the main lift in `entries`.
    ///
    /// Nothing happens while percent or main are unset. If the main lift does not exist, the
    /// one rep max becomes undefined and `Error::NotFound` is returned.
    pub fn recompute(&mut self, entries: &[OneRepMaxEntry]) -> Result<(), Error> {
        let Some(percent) = self.percent else {
            debug!("skip recomputation of variant {}: percent unset", self.name);
            return Ok(());
        };
        let Some(main) = &self.main else {
            debug!("skip recomputation of variant {}: main unset", self.name);
            return Ok(());
        };
        match entries.iter().find(|entry| entry.short_name == *main) {
            Some(entry) => {
                self.one_rm = Some(derive_variant_one_rep_max(entry.one_rm, percent));
                Ok(())
            }
            None => {
                self.one_rm = None;
                Err(Error::NotFound(format!("main lift {main} of variant {}", self.name)))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum VariantField {
    Name(Name),
    Main(ShortName),
    Percent(Percent),
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct VariantID(Uuid);

impl VariantID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for VariantID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for VariantID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::{RPE, Reps, Weight};

    #[fixture]
    fn entries() -> Vec<OneRepMaxEntry> {
        vec![
            OneRepMaxEntry::new(
                1.into(),
                ShortName::new("SQ").unwrap(),
                Weight::new(315.0).unwrap(),
                Reps::new(1).unwrap(),
                RPE::TEN,
            ),
            OneRepMaxEntry::new(
                2.into(),
                ShortName::new("BP").unwrap(),
                Weight::new(225.0).unwrap(),
                Reps::new(1).unwrap(),
                RPE::TEN,
            ),
        ]
    }

    fn variant(main: &str, percent: Option<u32>) -> Variant {
        Variant::new(
            1.into(),
            Name::new("Pause Squat").unwrap(),
            Some(ShortName::new(main).unwrap()),
            percent.map(|p| Percent::new(p).unwrap()),
        )
    }

    #[rstest]
    #[case(315.0, 80, 252)]
    #[case(315.0, 10, 32)]
    #[case(315.0, 200, 630)]
    #[case(225.0, 85, 191)]
    #[case(0.0, 50, 0)]
    #[case(100.0, 125, 125)]
    fn test_derive_variant_one_rep_max(
        #[case] main_one_rm: f32,
        #[case] percent: u32,
        #[case] expected: u32,
    ) {
        assert_eq!(
            derive_variant_one_rep_max(main_one_rm, Percent::new(percent).unwrap()),
            expected
        );
    }

    #[test]
    fn test_derive_variant_one_rep_max_all_percentages() {
        for p in 10..=200 {
            let percent = Percent::new(p).unwrap();
            let expected = (400 * p) / 100;
            assert_eq!(derive_variant_one_rep_max(400.0, percent), expected);
        }
    }

    #[rstest]
    fn test_variant_recompute(entries: Vec<OneRepMaxEntry>) {
        let mut variant = variant("SQ", Some(80));
        assert_eq!(variant.recompute(&entries), Ok(()));
        assert_eq!(variant.one_rm, Some(252));

        variant.apply(VariantField::Main(ShortName::new("BP").unwrap()));
        assert_eq!(variant.recompute(&entries), Ok(()));
        assert_eq!(variant.one_rm, Some(180));
    }

    #[rstest]
    fn test_variant_recompute_percent_unset(entries: Vec<OneRepMaxEntry>) {
        let mut variant = variant("SQ", None);
        variant.one_rm = Some(100);
        assert_eq!(variant.recompute(&entries), Ok(()));
        assert_eq!(variant.one_rm, Some(100));

        variant.main = Some(ShortName::new("XX").unwrap());
        assert_eq!(variant.recompute(&entries), Ok(()));
        assert_eq!(variant.one_rm, Some(100));
    }

    #[rstest]
    fn test_variant_recompute_main_unset(entries: Vec<OneRepMaxEntry>) {
        let mut variant = variant("SQ", Some(80));
        variant.main = None;
        assert_eq!(variant.recompute(&entries), Ok(()));
        assert_eq!(variant.one_rm, None);
    }

    #[rstest]
    fn test_variant_recompute_main_not_found(entries: Vec<OneRepMaxEntry>) {
        let mut variant = variant("DL", Some(80));
        variant.one_rm = Some(300);
        assert!(matches!(
            variant.recompute(&entries),
            Err(Error::NotFound(message)) if message.contains("DL")
        ));
        assert_eq!(variant.one_rm, None);
    }

    #[rstest]
    fn test_variant_recompute_uses_first_match(mut entries: Vec<OneRepMaxEntry>) {
        entries[1].short_name = ShortName::new("SQ").unwrap();
        let mut variant = variant("SQ", Some(50));
        assert_eq!(variant.recompute(&entries), Ok(()));
        assert_eq!(variant.one_rm, Some(158));
    }

    #[test]
    fn test_variant_apply() {
        let mut variant = variant("SQ", None);
        variant.apply(VariantField::Name(Name::new("Box Squat").unwrap()));
        variant.apply(VariantField::Percent(Percent::new(90).unwrap()));
        assert_eq!(variant.name, Name::new("Box Squat").unwrap());
        assert_eq!(variant.percent, Some(Percent::new(90).unwrap()));
        assert_eq!(variant.one_rm, None);
    }

    #[test]
    fn test_variant_id_nil() {
        assert!(VariantID::nil().is_nil());
        assert_eq!(VariantID::nil(), VariantID::default());
    }
}
