//! Typed recurrence rules.
//!
//! Every payload type validates its range on construction, so a
//! [`RecurrenceRule`] value is always safe to hand to the calculator.

use std::collections::BTreeSet;

/// Rule kind tokens, the first field of a rule.
pub const DAILY_TOKEN: &str = "d";
pub const YEARLY_TOKEN: &str = "y";
pub const WEEKLY_TOKEN: &str = "w";
pub const MONTHLY_TOKEN: &str = "m";

/// A parsed recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecurrenceRule {
    /// Every `interval` days from the start date.
    Daily(DailyInterval),
    /// Same month and day every year.
    Yearly,
    /// Any of the listed weekdays.
    Weekly(WeekdaySet),
    /// The listed days of the listed months.
    Monthly(MonthlyRule),
}

impl RecurrenceRule {
    /// Token naming the kind of this rule.
    #[must_use]
    pub const fn kind_token(&self) -> &'static str {
        match self {
            Self::Daily(_) => DAILY_TOKEN,
            Self::Yearly => YEARLY_TOKEN,
            Self::Weekly(_) => WEEKLY_TOKEN,
            Self::Monthly(_) => MONTHLY_TOKEN,
        }
    }
}

/// Day interval of a daily rule, `1..=400`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DailyInterval(u16);

impl DailyInterval {
    pub const MIN: u16 = 1;
    pub const MAX: u16 = 400;

    #[must_use]
    pub const fn new(days: u16) -> Option<Self> {
        if days >= Self::MIN && days <= Self::MAX {
            Some(Self(days))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn days(self) -> u16 {
        self.0
    }
}

/// Non-empty set of weekday numbers, 1 = Monday through 7 = Sunday.
///
/// Stored as a bitmask; bit `n - 1` is set for weekday `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// Builds a set from weekday numbers. Duplicates collapse.
    ///
    /// `None` if the input is empty or any number is outside `1..=7`.
    #[must_use]
    pub fn from_numbers(numbers: &[u8]) -> Option<Self> {
        let mut bits = 0u8;
        for &n in numbers {
            if !(1..=7).contains(&n) {
                return None;
            }
            bits |= 1 << (n - 1);
        }
        (bits != 0).then_some(Self(bits))
    }

    #[must_use]
    pub fn contains(self, weekday: u8) -> bool {
        (1..=7).contains(&weekday) && self.0 & (1 << (weekday - 1)) != 0
    }

    /// Weekday numbers in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=7).filter(move |&n| self.contains(n))
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Always `false` for a constructed set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// One day specifier of a monthly rule.
///
/// Ordered with plain days first (ascending), then `-1`, then `-2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MonthDay {
    /// A fixed day number, `1..=31`.
    Day(u8),
    /// `-1`: the month's last day.
    Last,
    /// `-2`: the day before the month's last day.
    SecondToLast,
}

impl MonthDay {
    /// Maps the rule notation (`1..=31`, `-1`, `-2`) to a day specifier.
    #[must_use]
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            -1 => Some(Self::Last),
            -2 => Some(Self::SecondToLast),
            1..=31 => u8::try_from(n).ok().map(Self::Day),
            _ => None,
        }
    }

    /// The rule notation for this specifier.
    #[must_use]
    pub fn number(self) -> i8 {
        match self {
            // Day is at most 31
            Self::Day(d) => i8::try_from(d).unwrap_or(i8::MAX),
            Self::Last => -1,
            Self::SecondToLast => -2,
        }
    }

    /// Concrete day in a month of `days_in_month` days, `None` if that month
    /// has no such day.
    #[must_use]
    pub fn resolve(self, days_in_month: u32) -> Option<u32> {
        match self {
            Self::Day(d) => Some(u32::from(d)).filter(|&d| d <= days_in_month),
            Self::Last => Some(days_in_month).filter(|&d| d >= 1),
            Self::SecondToLast => days_in_month.checked_sub(1).filter(|&d| d >= 1),
        }
    }
}

/// Non-empty set of day specifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonthDaySet(BTreeSet<MonthDay>);

impl MonthDaySet {
    /// `None` if `days` is empty or a `Day` is outside `1..=31`.
    #[must_use]
    pub fn new(days: impl IntoIterator<Item = MonthDay>) -> Option<Self> {
        let set: BTreeSet<MonthDay> = days.into_iter().collect();
        let valid = set
            .iter()
            .all(|d| !matches!(d, MonthDay::Day(n) if !(1..=31).contains(n)));
        (valid && !set.is_empty()).then_some(Self(set))
    }

    pub fn iter(&self) -> impl Iterator<Item = MonthDay> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Non-empty set of month numbers, 1 = January through 12 = December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthSet(u16);

impl MonthSet {
    /// `None` if `numbers` is empty or any is outside `1..=12`.
    #[must_use]
    pub fn from_numbers(numbers: &[u8]) -> Option<Self> {
        let mut bits = 0u16;
        for &n in numbers {
            if !(1..=12).contains(&n) {
                return None;
            }
            bits |= 1 << (n - 1);
        }
        (bits != 0).then_some(Self(bits))
    }

    #[must_use]
    pub fn contains(self, month: u32) -> bool {
        (1..=12).contains(&month) && self.0 & (1 << (month - 1)) != 0
    }

    /// Month numbers in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=12u8).filter(move |&n| self.contains(u32::from(n)))
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Always `false` for a constructed set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Days of month plus an optional month restriction.
///
/// At least one listed day exists in at least one eligible month, which is
/// what guarantees that a monthly scan finds an occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonthlyRule {
    days: MonthDaySet,
    months: Option<MonthSet>,
}

impl MonthlyRule {
    /// `None` when no listed day can ever fall in an eligible month,
    /// e.g. day 31 restricted to February.
    #[must_use]
    pub fn new(days: MonthDaySet, months: Option<MonthSet>) -> Option<Self> {
        let rule = Self { days, months };
        let reachable = rule.eligible_months().any(|month| rule.can_occur_in(month));
        reachable.then_some(rule)
    }

    #[must_use]
    pub const fn days(&self) -> &MonthDaySet {
        &self.days
    }

    /// `None` means every month.
    #[must_use]
    pub const fn months(&self) -> Option<MonthSet> {
        self.months
    }

    /// Whether occurrences may fall in `month` at all.
    #[must_use]
    pub fn allows_month(&self, month: u32) -> bool {
        self.months.is_none_or(|set| set.contains(month))
    }

    /// Whether any listed day exists in `month` of some year.
    #[must_use]
    pub fn can_occur_in(&self, month: u32) -> bool {
        let longest = max_days_in_month(month);
        self.allows_month(month) && self.days.iter().any(|d| d.resolve(longest).is_some())
    }

    fn eligible_months(&self) -> impl Iterator<Item = u32> + '_ {
        (1..=12).filter(|&m| self.allows_month(m))
    }
}

/// Longest a month can be in any year (February counts 29).
#[must_use]
pub const fn max_days_in_month(month: u32) -> u32 {
    match month {
        2 => 29,
        4 | 6 | 9 | 11 => 30,
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        _ => 0,
    }
}
