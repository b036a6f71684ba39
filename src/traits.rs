use group::Group;
use pasta_curves::{pallas, vesta};

/// The group arithmetic a [`PowerWindow`](crate::PowerWindow) is built on.
///
/// Elements are plain values; the table clones them freely and never looks
/// inside.
pub trait WindowGroup: Clone {
    fn identity() -> Self;

    fn add(&self, rhs: &Self) -> Self;

    fn double(&self) -> Self;

    fn negate(&self) -> Self;
}

macro_rules! curve_window_group {
    ($t:ty) => {
        impl WindowGroup for $t {
            fn identity() -> Self {
                <$t as Group>::identity()
            }

            fn add(&self, rhs: &Self) -> Self {
                self + rhs
            }

            fn double(&self) -> Self {
                <$t as Group>::double(self)
            }

            fn negate(&self) -> Self {
                -self
            }
        }
    };
}

curve_window_group!(pallas::Point);
curve_window_group!(vesta::Point);

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::OsRng;

    fn run<G: Group + WindowGroup>() {
        let p = <G as Group>::random(OsRng);
        let q = <G as Group>::random(OsRng);

        assert_eq!(WindowGroup::add(&p, &q), p + q);
        assert_eq!(WindowGroup::double(&p), p + p);
        assert_eq!(WindowGroup::add(&p, &p.negate()), <G as WindowGroup>::identity());
        assert!(bool::from(<G as WindowGroup>::identity().is_identity()));
    }

    #[test]
    fn test_curve_ops() {
        run::<pallas::Point>();
        run::<vesta::Point>();
    }
}
