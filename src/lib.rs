//! Fixed-base windowed scalar multiplication.
//!
//! A [`PowerWindow`] precomputes every `window`-bit multiple of a base element,
//! pre-scaled per window position, so that `y * base` costs one table lookup
//! and at most one group addition per scalar digit.
//!
//! ```no_run
//! use ff::Field;
//! use group::Group;
//! use pasta_curves::pallas;
//! use power_window::PowerWindow;
//! use rand_core::OsRng;
//!
//! # fn main() -> power_window::Result<()> {
//! let g = pallas::Point::generator();
//! let table = PowerWindow::new(&g, 255, 4)?;
//!
//! let secret = pallas::Scalar::random(OsRng);
//! let p = table.power_field(&secret)?;
//! assert_eq!(p, g * secret);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod limb;
mod scalar;
mod table;
mod traits;
pub mod utilities;
mod window;

pub use config::{Config, MAX_WINDOW};
pub use error::{Error, Result};
pub use limb::{Limb, Word, WORD_BITS};
pub use scalar::{Scalar, ScalarWords};
pub use table::PowerWindow;
pub use traits::WindowGroup;
pub use window::Digits;

#[cfg(test)]
mod tests {
    use ff::{Field, PrimeField, PrimeFieldBits};
    use group::Curve;
    use num_bigint::BigUint;
    use num_traits::Num;
    use pasta_curves::{
        arithmetic::{CurveAffine, FieldExt},
        pallas, vesta,
    };
    use rand_core::OsRng;

    use crate::{PowerWindow, WindowGroup};

    #[test]
    fn test_ecdsa() {
        // from group's base field to scalar field
        fn mod_n<C: CurveAffine>(x: C::Base) -> C::ScalarExt {
            // convert to bigint
            let x = BigUint::from_bytes_le(x.to_repr().as_ref());

            // calculate mod scalar modulus
            let modulus =
                BigUint::from_str_radix(&<C::ScalarExt as FieldExt>::MODULUS[2..], 16).unwrap();
            let x = x % modulus;

            <C::ScalarExt as PrimeField>::from_str_vartime(&x.to_str_radix(10)[..]).unwrap()
        }

        fn run<C>()
        where
            C: CurveAffine,
            C::CurveExt: WindowGroup,
            C::ScalarExt: PrimeFieldBits,
        {
            let g = C::generator();
            let table =
                PowerWindow::new(&g.to_curve(), C::ScalarExt::NUM_BITS as usize, 4).unwrap();

            // keypair
            let sk = C::ScalarExt::random(OsRng);
            let pk = table.power_field(&sk).unwrap().to_affine();
            assert_eq!(pk, (g * sk).to_affine());

            // random msg_hash
            let msg_hash = C::ScalarExt::random(OsRng);

            // k
            let k = C::ScalarExt::random(OsRng);
            let k_inv = k.invert().unwrap();

            // r
            let rpoint = table.power_field(&k).unwrap().to_affine();
            let r = mod_n::<C>(*rpoint.coordinates().unwrap().x());

            // s
            let s = k_inv * (msg_hash + (r * sk));

            // verify, fixed-base half through the table
            let s_inv = s.invert().unwrap();
            let u_1 = msg_hash * s_inv;
            let u_2 = r * s_inv;
            let r_point = (table.power_field(&u_1).unwrap() + pk * u_2).to_affine();
            let r_candidate = mod_n::<C>(*r_point.coordinates().unwrap().x());
            assert_eq!(r, r_candidate);
        }

        run::<pallas::Affine>();
        run::<vesta::Affine>();
    }
}
