//! The list algorithm library.
//!
//! Building any of these never forces the input lists. `map`, `filter`, `append`, `zip_with` and `take`
//! force one input node per output node, so they are safe on infinite lists. `reverse`, `length`, `last`
//! and `init` need the whole input spine and never finish on an infinite list.

use crate::error::Error;
use crate::function::Function;
use crate::list::List;
use crate::list::Node;
use crate::thunk::Thunk;

impl<T: Clone + 'static> List<T> {
    /// Applies a function to every element.
    pub fn map<U>(&self, f: &Function<Thunk<T>, U>) -> List<U>
    where
        U: Clone + 'static,
    {
        let (f, xs) = (f.clone(), self.clone());
        List::lazy(move || {
            Ok(match xs.force()? {
                Node::Nil => List::nil(),
                Node::Cons(x, rest) => List::cons(f.call(x), rest.map(&f)),
            })
        })
    }

    /// Keeps the elements for which a predicate holds.
    /// Finding the next kept element forces the predicate on every element skipped on the way.
    pub fn filter(&self, p: &Function<Thunk<T>, bool>) -> List<T> {
        let (p, xs) = (p.clone(), self.clone());
        List::lazy(move || {
            Ok(match xs.force()? {
                Node::Nil => List::nil(),
                Node::Cons(x, rest) => {
                    if p.call(x.clone()).force()? { List::cons(x, rest.filter(&p)) }
                    else { rest.filter(&p) }
                },
            })
        })
    }

    /// Concatenates two lists. The second list is not touched until the first is exhausted.
    pub fn append(&self, other: &List<T>) -> List<T> {
        let (xs, ys) = (self.clone(), other.clone());
        List::lazy(move || {
            Ok(match xs.force()? {
                Node::Nil => ys.clone(),
                Node::Cons(x, rest) => List::cons(x, rest.append(&ys)),
            })
        })
    }

    /// Reverses a list. Forcing even the first node of the result forces the entire input spine.
    pub fn reverse(&self) -> List<T> {
        let xs = self.clone();
        List::lazy(move || Ok(Self::reverse_onto(&xs, &List::nil())))
    }

    fn reverse_onto(xs: &List<T>, acc: &List<T>) -> List<T> {
        let (xs, acc) = (xs.clone(), acc.clone());
        List::lazy(move || {
            Ok(match xs.force()? {
                Node::Nil => acc.clone(),
                Node::Cons(x, rest) => Self::reverse_onto(&rest, &List::cons(x, acc.clone())),
            })
        })
    }

    /// The number of elements, without forcing any of them.
    pub fn length(&self) -> Thunk<i64> {
        let xs = self.clone();
        Thunk::lazy(move || {
            Ok(match xs.force()? {
                Node::Nil => Thunk::eager(0),
                Node::Cons(_, rest) => Thunk::eager(1) + rest.length(),
            })
        })
    }

    /// The final element. Forcing it on an empty list fails.
    pub fn last(&self) -> Thunk<T> {
        let xs = self.clone();
        Thunk::lazy(move || {
            match xs.force()? {
                Node::Nil => Err(Error::InvalidOperation("last of empty list")),
                Node::Cons(x, rest) => {
                    if rest.is_empty()? { Ok(x) } else { Ok(rest.last()) }
                },
            }
        })
    }

    /// Every element but the final one. Forcing it on an empty list fails.
    pub fn init(&self) -> List<T> {
        let xs = self.clone();
        List::lazy(move || {
            match xs.force()? {
                Node::Nil => Err(Error::InvalidOperation("init of empty list")),
                Node::Cons(x, rest) => {
                    if rest.is_empty()? { Ok(List::nil()) } else { Ok(List::cons(x, rest.init())) }
                },
            }
        })
    }

    /// Combines two lists element by element, stopping at the end of the shorter one.
    pub fn zip_with<U, V>(&self, f: &Function<(Thunk<T>, Thunk<U>), V>, other: &List<U>) -> List<V>
    where
        U: Clone + 'static,
        V: Clone + 'static,
    {
        let (f, xs, ys) = (f.clone(), self.clone(), other.clone());
        List::lazy(move || {
            let (x, xs) = match xs.force()? {
                Node::Nil => return Ok(List::nil()),
                Node::Cons(x, xs) => (x, xs),
            };

            Ok(match ys.force()? {
                Node::Nil => List::nil(),
                Node::Cons(y, ys) => List::cons(f.call((x.clone(), y)), xs.zip_with(&f, &ys)),
            })
        })
    }

    /// The first `n` elements, or the whole list if it is shorter.
    pub fn take(&self, n: usize) -> List<T> {
        let xs = self.clone();
        List::lazy(move || {
            if n == 0 {
                return Ok(List::nil());
            }

            Ok(match xs.force()? {
                Node::Nil => List::nil(),
                Node::Cons(x, rest) => List::cons(x, rest.take(n - 1)),
            })
        })
    }

    /// The infinite list `x, f(x), f(f(x)), ...`. Each element shares the one before it.
    pub fn iterate(f: &Function<Thunk<T>, T>, x: Thunk<T>) -> List<T> {
        let f = f.clone();
        List::lazy(move || {
            let next = f.call(x.clone());
            Ok(List::cons(x.clone(), List::iterate(&f, next)))
        })
    }

    /// The infinite list repeating a single element.
    pub fn repeat(x: Thunk<T>) -> List<T> {
        List::fix(move |xs| Ok(List::cons(x.clone(), xs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::Rng;

    use crate::list::{cons, nil};
    use crate::types::Int;
    use crate::test_util::{Counter, double, ints, nats, fibs};

    fn is_even() -> Function<Int, bool> {
        Function::from_fn(|x: Int| (x % Thunk::eager(2)).eq(&Thunk::eager(0)))
    }

    fn add() -> Function<(Int, Int), i64> {
        Function::from_fn(|(x, y): (Int, Int)| x + y)
    }

    fn random_ints(len: usize) -> Vec<i64> {
        let mut rng = rand::thread_rng();
        (0..len).map(|_| rng.gen_range(-1000, 1000)).collect()
    }

    #[test]
    fn map() {
        assert_eq!(Ok(vec![2, 4]), ints(&[1, 2]).map(&double()).collect::<Vec<_>>());
        assert_eq!(Ok(true), nil::<i64>().map(&double()).eq(&nil()).force());

        let as_float: Function<Int, f64> = Function::from_fn(|x: Int| x.map(|i| i as f64 / 2.0));
        assert_eq!(Ok(vec![0.5, 1.5]), ints(&[1, 3]).map(&as_float).collect::<Vec<_>>());
    }

    #[test]
    fn construction_never_forces_inputs() {
        let counter = Counter::new();

        let (c1, c2) = (counter.clone(), counter.clone());
        let xs: List<i64> = List::lazy(move || { c1.tick(); Ok(ints(&[1, 2, 3, 4])) });
        let ys: List<i64> = List::lazy(move || { c2.tick(); Ok(ints(&[5])) });

        let mapped = xs.map(&double());
        let filtered = xs.filter(&is_even());
        let appended = xs.append(&ys);
        let zipped = xs.zip_with(&add(), &ys);
        let taken = xs.take(2);
        let reversed = xs.reverse();
        let length = xs.length();
        let (last, init) = (xs.last(), xs.init());
        assert_eq!(0, counter.count());

        // Failing inputs are just as untouched.
        let failing: List<i64> = List::lazy(|| Err(Error::custom("forced")));
        let _ = (failing.map(&double()), failing.filter(&is_even()), failing.append(&failing));

        assert_eq!(Ok(vec![2, 4, 6, 8]), mapped.collect::<Vec<_>>());
        assert_eq!(1, counter.count());
        assert_eq!(Ok(vec![2, 4]), filtered.collect::<Vec<_>>());
        assert_eq!(Ok(vec![1, 2, 3, 4]), appended.take(4).collect::<Vec<_>>());
        assert_eq!(1, counter.count());
        assert_eq!(Ok(vec![1, 2, 3, 4, 5]), appended.collect::<Vec<_>>());
        assert_eq!(2, counter.count());

        assert_eq!(Ok(vec![6]), zipped.collect::<Vec<_>>());
        assert_eq!(Ok(vec![1, 2]), taken.collect::<Vec<_>>());
        assert_eq!(Ok(vec![4, 3, 2, 1]), reversed.collect::<Vec<_>>());
        assert_eq!(Ok(4), length.force());
        assert_eq!(Ok(4), last.force());
        assert_eq!(Ok(vec![1, 2, 3]), init.collect::<Vec<_>>());
        assert_eq!(2, counter.count());

        assert_eq!(Err(Error::custom("forced")), failing.map(&double()).force().map(|_| ()));
    }

    #[test]
    fn map_forces_elements_only_on_demand() {
        let counter = Counter::new();

        let c = counter.clone();
        let poisoned: Int = Thunk::lazy(move || { c.tick(); Err(Error::custom("forced")) });
        let list = List::from_thunks(vec![poisoned, Thunk::eager(5)]);

        let mapped = list.map(&double());
        assert_eq!(Ok(10), mapped.at(1).and_then(|x| x.force()));
        assert_eq!(0, counter.count());
        assert_eq!(Err(Error::custom("forced")), mapped.head().force());
    }

    #[test]
    fn filter() {
        assert_eq!(Ok(vec![2, 4]), ints(&[1, 2, 3, 4]).filter(&is_even()).collect::<Vec<_>>());
        assert_eq!(Ok(Vec::<i64>::new()), ints(&[1, 3]).filter(&is_even()).collect::<Vec<_>>());

        let evens = nats().filter(&is_even());
        assert_eq!(Ok(40), evens.at(20).and_then(|x| x.force()));
    }

    #[test]
    fn append() {
        let produced = ints(&[1, 2]).append(&ints(&[3, 4]));
        assert_eq!(Ok(true), produced.eq(&ints(&[1, 2, 3, 4])).force());

        let xs = ints(&[7, 8, 9]);
        assert_eq!(Ok(true), xs.append(&nil()).eq(&xs).force());
        assert_eq!(Ok(true), nil().append(&xs).eq(&xs).force());

        // The second list is never needed when reading from an infinite first list.
        let unreachable: List<i64> = List::lazy(|| Err(Error::custom("forced")));
        assert_eq!(Ok(30), nats().append(&unreachable).at(30).and_then(|x| x.force()));
    }

    #[test]
    fn length() {
        assert_eq!(Ok(2), ints(&[1, 2]).length().force());
        assert_eq!(Ok(0), nil::<i64>().length().force());

        // Elements are not forced.
        let list = List::from_thunks(vec![Thunk::lazy(|| Err(Error::custom("forced"))), Thunk::eager(1i64)]);
        assert_eq!(Ok(2), list.length().force());

        for _ in 0..10 {
            let (a, b) = (random_ints(7), random_ints(4));
            let (xs, ys) = (List::from(a.clone()), List::from(b.clone()));

            let expected = xs.length() + ys.length();
            assert_eq!(expected.force(), xs.append(&ys).length().force());
            assert_eq!(Ok((a.len() + b.len()) as i64), expected.force());
        }
    }

    #[test]
    fn reverse() {
        assert_eq!(Ok(true), ints(&[1, 2]).reverse().eq(&ints(&[2, 1])).force());
        assert_eq!(Ok(true), nil::<i64>().reverse().is_empty());

        for len in 0..15 {
            let values = random_ints(len);
            let xs = List::from(values.clone());
            let mut expected = values;
            expected.reverse();

            assert_eq!(Ok(expected), xs.reverse().collect::<Vec<_>>());
            assert_eq!(Ok(true), xs.reverse().reverse().eq(&xs).force());
        }
    }

    #[test]
    fn reverse_forces_whole_spine() {
        let counter = Counter::new();

        let c = counter.clone();
        let end: List<i64> = List::lazy(move || { c.tick(); Ok(nil()) });
        let xs = cons(Thunk::eager(1), cons(Thunk::eager(2), end));

        let reversed = xs.reverse();
        assert_eq!(0, counter.count());

        assert_eq!(Ok(2), reversed.head().force());
        assert_eq!(1, counter.count());
    }

    #[test]
    fn last() {
        assert_eq!(Ok(2), ints(&[1, 2]).last().force());
        assert_eq!(Ok(5), ints(&[5]).last().force());
        assert_eq!(Err(Error::InvalidOperation("last of empty list")), nil::<i64>().last().force());
    }

    #[test]
    fn init() {
        assert_eq!(Ok(true), ints(&[1, 2]).init().eq(&ints(&[1])).force());
        assert_eq!(Ok(true), ints(&[1]).init().is_empty());
        assert_eq!(Err(Error::InvalidOperation("init of empty list")), nil::<i64>().init().force().map(|_| ()));
    }

    #[test]
    fn zip_with() {
        let produced = ints(&[1, 2, 3]).zip_with(&add(), &ints(&[10, 20]));
        assert_eq!(Ok(vec![11, 22]), produced.collect::<Vec<_>>());

        let produced = nats().zip_with(&add(), &nats());
        assert_eq!(Ok(vec![0, 2, 4, 6]), produced.take(4).collect::<Vec<_>>());
    }

    #[test]
    fn take() {
        assert_eq!(Ok(vec![0, 1, 2]), nats().take(3).collect::<Vec<_>>());
        assert_eq!(Ok(vec![1, 2]), ints(&[1, 2]).take(5).collect::<Vec<_>>());
        assert_eq!(Ok(Vec::<i64>::new()), nats().take(0).collect::<Vec<_>>());
    }

    #[test]
    fn iterate() {
        let powers = List::iterate(&double(), Thunk::eager(1i64));
        assert_eq!(Ok(vec![1, 2, 4, 8, 16]), powers.take(5).collect::<Vec<_>>());
        assert_eq!(Ok(1 << 40), powers.at(40).and_then(|x| x.force()));
    }

    #[test]
    fn repeat() {
        let sevens = List::repeat(Thunk::eager(7i64));
        assert_eq!(Ok(vec![7, 7, 7]), sevens.take(3).collect::<Vec<_>>());
        assert_eq!(Ok(7), sevens.at(1000).and_then(|x| x.force()));
    }

    #[test]
    fn naturals() {
        assert_eq!(Ok(100), nats().at(100).and_then(|x| x.force()));
        assert_eq!(Ok(100), nats().nth(Thunk::eager(100)).force());
    }

    #[test]
    fn fibonacci() {
        let expected = vec![0u64, 1, 1, 2, 3, 5, 8, 13, 21, 34];
        assert_eq!(Ok(expected), fibs().take(10).collect::<Vec<_>>());
        assert_eq!(Ok(2_880_067_194_370_816_120), fibs().at(90).and_then(|x| x.force()));
    }

    #[cfg(feature = "integer")]
    #[test]
    fn fibonacci_past_machine_integers() {
        use crate::types::{BigInt, Integer};

        let add: Function<(Integer, Integer), BigInt> = Function::from_fn(|(x, y): (Integer, Integer)| x + y);
        let fibs = List::fix(move |fibs: List<BigInt>| {
            let rest = fibs.zip_with(&add, &fibs.tail());
            Ok(cons(Thunk::eager(BigInt::from(0)), cons(Thunk::eager(BigInt::from(1)), rest)))
        });

        // Walking in order keeps every forced element one step away from memoized ones.
        let produced = fibs.iter().nth(1000).map(|x| x.map(|n| n.to_string()));
        let expected = concat!(
            "43466557686937456435688527675040625802564660517371780402481729089536555417949051890403879840079255169295922593",
            "080322634775209689623239873322471161642996440906533187938298969649928516003704476137795166849228875",
        );
        assert_eq!(Some(Ok(String::from(expected))), produced);

        assert_eq!(Ok(true), fibs.at(94).and_then(|x| x.force()).map(|n| n > BigInt::from(u64::MAX)));
    }

    #[test]
    fn self_referential_naturals() {
        let succ: Function<Int, i64> = Function::from_fn(|x: Int| x + Thunk::eager(1));
        let naturals = List::fix(move |this| Ok(cons(Thunk::eager(0i64), this.map(&succ))));

        assert_eq!(Ok(100), naturals.at(100).and_then(|x| x.force()));
        assert_eq!(Ok(vec![0, 1, 2]), naturals.take(3).collect::<Vec<_>>());
    }
}
