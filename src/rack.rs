use crate::{draw, Bag, Rack, BLANK, RACK_CAPACITY};
use rand::Rng;
use smallvec::SmallVec;
use tracing::debug;

/// Where one spent letter comes from in a [rack](Rack).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Spend {
    /// The same letter at this index.
    Exact(usize),
    /// A [wildcard](BLANK) at this index.
    Wildcard(usize),
}

impl Spend {
    /// The index into the rack.
    pub fn index(self) -> usize {
        match self {
            Spend::Exact(index) | Spend::Wildcard(index) => index,
        }
    }
}

/// One [spend](Spend) for each letter, in the order the letters were given.
pub type SpendPlan = SmallVec<[Spend; RACK_CAPACITY]>;

/// Matches each of `letters` with a distinct letter in `rack`. Exact matches are used for as
/// many letters as possible before any [wildcard](BLANK) is used.
///
/// # Errors
///
/// The letters, in order, which neither an exact match nor a wildcard is left for.
pub fn spend_plan(rack: &Rack, letters: &[char]) -> Result<SpendPlan, Vec<char>> {
    let mut used: SmallVec<[bool; RACK_CAPACITY]> = rack.iter().map(|_| false).collect();
    let mut take = |matches: &dyn Fn(char) -> bool| {
        let index = (0..rack.len()).find(|&index| !used[index] && matches(rack[index]))?;
        used[index] = true;
        Some(index)
    };

    let exact: SmallVec<[Option<usize>; RACK_CAPACITY]> = letters
        .iter()
        .map(|&letter| take(&|held| held == letter))
        .collect();

    let mut missing = Vec::new();
    let mut plan = SpendPlan::with_capacity(letters.len());
    for (&letter, exact) in letters.iter().zip(exact) {
        match exact {
            Some(index) => plan.push(Spend::Exact(index)),
            None => match take(&|held| held == BLANK) {
                Some(index) => plan.push(Spend::Wildcard(index)),
                None => missing.push(letter),
            },
        }
    }

    if !missing.is_empty() {
        return Err(missing);
    }
    Ok(plan)
}

/// Removes every letter named by `plan` from `rack`.
pub fn remove_letters(rack: &mut Rack, plan: &SpendPlan) {
    let mut indexes: SmallVec<[usize; RACK_CAPACITY]> =
        plan.iter().map(|spend| spend.index()).collect();
    indexes.sort_unstable();
    for index in indexes.into_iter().rev() {
        rack.remove(index);
    }
}

/// Draws letters from `bag` into `rack` until the rack holds [RACK_CAPACITY] letters or the
/// bag is empty.
///
/// # Returns
///
/// The number of letters drawn.
pub fn refill<R: Rng + ?Sized>(rack: &mut Rack, bag: &mut Bag, rng: &mut R) -> usize {
    let mut drawn = 0;
    while rack.len() < RACK_CAPACITY {
        let Some(letter) = draw(bag, rng) else {
            debug!(rack_len = rack.len(), "bag is empty, rack left under-filled");
            break;
        };
        rack.push(letter);
        drawn += 1;
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_letters;
    use itertools::Itertools;
    use smallvec::smallvec;

    #[test]
    fn spend_plan_exact() {
        let rack: Rack = smallvec!['F', 'O', 'X', 'O', 'F'];

        let plan = spend_plan(&rack, &['F', 'O', 'O', 'F']).expect("spend_plan should return Ok");

        assert_eq!(
            SpendPlan::from_slice(&[
                Spend::Exact(0),
                Spend::Exact(1),
                Spend::Exact(3),
                Spend::Exact(4)
            ]),
            plan
        );
    }

    #[test]
    fn spend_plan_prefers_exact() {
        let rack: Rack = smallvec![BLANK, 'A'];

        let plan = spend_plan(&rack, &['A']).expect("spend_plan should return Ok");

        assert_eq!(SpendPlan::from_slice(&[Spend::Exact(1)]), plan);
    }

    #[test]
    fn spend_plan_exact_before_wildcard_in_order() {
        let rack: Rack = smallvec![BLANK, 'B'];

        // the first letter would take the wildcard if exact matches were not found first
        let plan = spend_plan(&rack, &['Q', 'B']).expect("spend_plan should return Ok");

        assert_eq!(
            SpendPlan::from_slice(&[Spend::Wildcard(0), Spend::Exact(1)]),
            plan
        );
    }

    #[test]
    fn spend_plan_wildcard_for_repeat() {
        let rack: Rack = smallvec!['A', BLANK];

        let plan = spend_plan(&rack, &['A', 'A']).expect("spend_plan should return Ok");

        assert_eq!(
            SpendPlan::from_slice(&[Spend::Exact(0), Spend::Wildcard(1)]),
            plan
        );
    }

    #[test]
    fn spend_plan_missing() {
        let rack: Rack = smallvec!['A', BLANK];

        assert_eq!(Err(vec!['C']), spend_plan(&rack, &['B', 'A', 'C']));
        assert_eq!(Err(vec!['C', 'D']), spend_plan(&rack, &['B', 'C', 'D']));
    }

    #[test]
    fn spend_plan_empty() {
        let rack = Rack::new();

        assert_eq!(Ok(SpendPlan::new()), spend_plan(&rack, &[]));
        assert_eq!(Err(vec!['A']), spend_plan(&rack, &['A']));
    }

    #[test]
    fn remove_letters_planned() {
        let mut rack: Rack = smallvec!['F', BLANK, 'X', 'O', 'F', 'O'];
        let plan =
            spend_plan(&rack, &['F', 'O', 'O', 'F', 'Z']).expect("spend_plan should return Ok");

        remove_letters(&mut rack, &plan);

        assert_eq!(Rack::from_slice(&['X']), rack);
    }

    #[test]
    fn refill_full_rack() {
        let mut rng = rand::thread_rng();
        let mut rack: Rack = random_letters(&mut rng, RACK_CAPACITY).into_iter().collect();
        let mut bag: Bag = random_letters(&mut rng, 10);

        assert_eq!(0, refill(&mut rack, &mut bag, &mut rng));
        assert_eq!(RACK_CAPACITY, rack.len());
        assert_eq!(10, bag.len());
    }

    #[test]
    fn refill_from_bag() {
        let mut rng = rand::thread_rng();
        let mut rack: Rack = smallvec!['A'];
        let mut bag: Bag = random_letters(&mut rng, 20);
        let letters = rack.iter().chain(&bag).copied().counts();

        let drawn = refill(&mut rack, &mut bag, &mut rng);

        assert_eq!(RACK_CAPACITY - 1, drawn);
        assert_eq!(RACK_CAPACITY, rack.len());
        assert_eq!(20 - drawn, bag.len());
        assert_eq!(letters, rack.iter().chain(&bag).copied().counts());
    }

    #[test]
    fn refill_empty_bag() {
        let mut rng = rand::thread_rng();
        let mut rack: Rack = smallvec!['A', 'B'];
        let mut bag: Bag = vec!['C', 'D'];

        assert_eq!(2, refill(&mut rack, &mut bag, &mut rng));
        assert_eq!(0, refill(&mut rack, &mut bag, &mut rng));
        assert_eq!(4, rack.len());
        assert!(bag.is_empty());
    }
}
