#[macro_export]
macro_rules! v {
    ($v:ident) => {
        $crate::syntax::V::new(stringify!($v)).unwrap()
    };
}

#[macro_export]
macro_rules! c {
    ($c:ident) => {
        $crate::syntax::C::new(stringify!($c)).unwrap()
    };
}

#[macro_export]
macro_rules! pred {
    ($p:ident) => {
        $crate::syntax::Pred::new(stringify!($p)).unwrap()
    };
}

#[macro_export]
macro_rules! term {
    ($v:ident) => {
        $crate::syntax::Term::Var($crate::v!($v))
    };
    (@$c:ident) => {
        $crate::syntax::Term::Const($crate::c!($c))
    };
}

#[macro_export]
macro_rules! terms {
    (@acc () -> ($($result:tt)*)) => {
        vec![$($result)*]
    };
    (@acc ($v:ident $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        $crate::terms!(@acc ($($($tail)*)?) -> ($($result)* $crate::term!($v),))
    };
    (@acc (@$c:ident $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        $crate::terms!(@acc ($($($tail)*)?) -> ($($result)* $crate::term!(@$c),))
    };
    ($($tail:tt)*) => {
        $crate::terms!(@acc ($($tail)*) -> ())
    };
}

#[macro_export]
macro_rules! fof {
    // Top
    ('|') => {
        $crate::syntax::Fof::Top
    };
    // Bottom
    (_|_) => {
        $crate::syntax::Fof::Bottom
    };
    // Atom
    ($pred:ident ($($t:tt)*)) => {
        {
            let ts: Vec<$crate::syntax::Term> = $crate::terms!($($t)*);
            $crate::pred!($pred).app(ts)
        }
    };
    // Equality
    (($($left:tt)*) = ($($right:tt)*)) => {
        $crate::fof!(@equals ($($left)*) ($($right)*))
    };
    ([$($left:tt)*] = [$($right:tt)*]) => {
        $crate::fof!(@equals ($($left)*) ($($right)*))
    };
    ({$($left:tt)*} = {$($right:tt)*}) => {
        $crate::fof!(@equals ($($left)*) ($($right)*))
    };
    // Negation
    (~($($fmla:tt)*)) => {
        $crate::fof!(@not ($($fmla)*))
    };
    (~[$($fmla:tt)*]) => {
        $crate::fof!(@not ($($fmla)*))
    };
    (~{$($fmla:tt)*}) => {
        $crate::fof!(@not ($($fmla)*))
    };
    // Conjunction
    (($($left:tt)*) & ($($right:tt)*)) => {
        $crate::fof!(@and ($($left)*) ($($right)*))
    };
    ([$($left:tt)*] & [$($right:tt)*]) => {
        $crate::fof!(@and ($($left)*) ($($right)*))
    };
    ({$($left:tt)*} & {$($right:tt)*}) => {
        $crate::fof!(@and ($($left)*) ($($right)*))
    };
    // Disjunction
    (($($left:tt)*) | ($($right:tt)*)) => {
        $crate::fof!(@or ($($left)*) ($($right)*))
    };
    ([$($left:tt)*] | [$($right:tt)*]) => {
        $crate::fof!(@or ($($left)*) ($($right)*))
    };
    ({$($left:tt)*} | {$($right:tt)*}) => {
        $crate::fof!(@or ($($left)*) ($($right)*))
    };
    // Implication
    (($($left:tt)*) -> ($($right:tt)*)) => {
        $crate::fof!(@implies ($($left)*) ($($right)*))
    };
    ([$($left:tt)*] -> [$($right:tt)*]) => {
        $crate::fof!(@implies ($($left)*) ($($right)*))
    };
    ({$($left:tt)*} -> {$($right:tt)*}) => {
        $crate::fof!(@implies ($($left)*) ($($right)*))
    };
    // Bi-implication
    (($($left:tt)*) <=> ($($right:tt)*)) => {
        $crate::fof!(@iff ($($left)*) ($($right)*))
    };
    ([$($left:tt)*] <=> [$($right:tt)*]) => {
        $crate::fof!(@iff ($($left)*) ($($right)*))
    };
    ({$($left:tt)*} <=> {$($right:tt)*}) => {
        $crate::fof!(@iff ($($left)*) ($($right)*))
    };
    // Universally Quantified
    (! $($v:ident),+ . ($($fmla:tt)*)) => {
        $crate::fof!(@forall ($($v),+) ($($fmla)*))
    };
    (! $($v:ident),+ . [$($fmla:tt)*]) => {
        $crate::fof!(@forall ($($v),+) ($($fmla)*))
    };
    (! $($v:ident),+ . {$($fmla:tt)*}) => {
        $crate::fof!(@forall ($($v),+) ($($fmla)*))
    };
    // Existentially Quantified
    (? $($v:ident),+ . ($($fmla:tt)*)) => {
        $crate::fof!(@exists ($($v),+) ($($fmla)*))
    };
    (? $($v:ident),+ . [$($fmla:tt)*]) => {
        $crate::fof!(@exists ($($v),+) ($($fmla)*))
    };
    (? $($v:ident),+ . {$($fmla:tt)*}) => {
        $crate::fof!(@exists ($($v),+) ($($fmla)*))
    };
    // Construction rules
    (@equals ($($left:tt)*) ($($right:tt)*)) => {
        $crate::term!($($left)*).equals($crate::term!($($right)*))
    };
    (@not ($($fmla:tt)*)) => {
        $crate::syntax::Fof::not($crate::fof!($($fmla)*))
    };
    (@and ($($left:tt)*) ($($right:tt)*)) => {
        $crate::fof!($($left)*).and($crate::fof!($($right)*))
    };
    (@or ($($left:tt)*) ($($right:tt)*)) => {
        $crate::fof!($($left)*).or($crate::fof!($($right)*))
    };
    (@implies ($($left:tt)*) ($($right:tt)*)) => {
        $crate::fof!($($left)*).implies($crate::fof!($($right)*))
    };
    (@iff ($($left:tt)*) ($($right:tt)*)) => {
        $crate::fof!($($left)*).iff($crate::fof!($($right)*))
    };
    (@forall ($($v:ident),+) ($($fmla:tt)*)) => {
        $crate::syntax::Fof::forall_all(vec![$($crate::v!($v),)+], $crate::fof!($($fmla)*))
    };
    (@exists ($($v:ident),+) ($($fmla:tt)*)) => {
        $crate::syntax::Fof::exists_all(vec![$($crate::v!($v),)+], $crate::fof!($($fmla)*))
    };
}

#[macro_export]
macro_rules! assert_eq_sorted_vecs {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                let mut l = left_val.to_vec();
                let mut r = right_val.to_vec();
                l.sort();
                r.sort();
                assert_eq!(l, r)
            }
        }
    }};
    ($left:expr, $right:expr ,) => {
        $crate::assert_eq_sorted_vecs!($left, $right)
    };
}

#[macro_export]
macro_rules! assert_debug_string {
    ($expected:expr, $value:expr) => {{
        match (&$expected, &$value) {
            (expected_val, val) => assert_eq!(*expected_val, format!("{:?}", val)),
        }
    }};
    ($expected:expr, $value:expr ,) => {
        $crate::assert_debug_string!($expected, $value)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_macro() {
        assert_eq!("⊤", fof!('|').to_string());
        assert_eq!("⟘", fof!(_|_).to_string());

        assert_eq!("P()", fof!(P()).to_string());
        assert_eq!("P(x, 'c, y, 'd)", fof!(P(x, @c, y, @d)).to_string());

        assert_eq!("'c = y", fof!((@c) = (y)).to_string());
        assert_eq!("x = y", fof!([x] = [y]).to_string());
        assert_eq!("x = y", fof!({ x } = { y }).to_string());

        assert_eq!("¬P(x, 'c)", fof!(~[P(x, @c)]).to_string());
        assert_eq!("P(x, 'c) ∧ ⟘", fof!((P(x, @c)) & (_|_)).to_string());
        assert_eq!("P(x, 'c) ∨ Q(z)", fof!([P(x, @c)] | [Q(z)]).to_string());
        assert_eq!("P(x, 'c) → Q(z)", fof!({P(x, @c)} -> {Q(z)}).to_string());
        assert_eq!("P(x, 'c) ⇔ Q(z)", fof!([P(x, @c)] <=> [Q(z)]).to_string());

        assert_eq!("∀ x. P(x, 'c)", fof!(!x . [P(x, @c)]).to_string());
        assert_eq!(
            "∀ x. (∀ y. P(x, 'c))",
            fof!(!x, y . (P(x, @c))).to_string()
        );
        assert_eq!(
            "∃ x. (∃ y. P(x, y))",
            fof!(?x, y . {P(x, y)}).to_string()
        );
    }
}
