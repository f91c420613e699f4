use super::*;
use crate::generator::Generator;

fn tangle(text: &str) -> Tangle {
    text.parse().unwrap()
}

#[test]
fn parse_and_display() {
    let t = tangle("1:2, 3':4 ,2':4',1':3");
    assert_eq!(t.n(), 4);
    assert_eq!(t.edge_from(-3), Some(Edge::new(4, -3)));
    assert!(t.contains(2, 1));
    assert!(!t.contains(1, 3));
    assert_eq!(t.to_string(), "2':4',1:2,3:1',4:3'");
    assert_eq!(tangle(&t.to_string()), t);
}

#[test]
fn parse_rejects_malformed_text() {
    for bad in ["", "1:2:3", "1", "a:b", "0:1", "1:1'x", "+1:2,1':2'", "1:-2", "1:2,1':+2'"] {
        assert!(bad.parse::<Tangle>().is_err(), "{bad}");
    }
    // repeated and missing labels
    assert!(matches!(
        "1:2,1:1'".parse::<Tangle>(),
        Err(Error::InvalidDiagram(_))
    ));
    assert!(matches!(
        "1:2,3:1'".parse::<Tangle>(),
        Err(Error::InvalidDiagram(_))
    ));
    assert!(matches!("1:1".parse::<Tangle>(), Err(Error::InvalidDiagram(_))));
}

#[test]
fn crossing_cache_and_length() {
    let t1 = tangle("1:2',2:1'");
    assert_eq!(t1.crossings_of(Edge::new(1, -2)), 1);
    assert_eq!(t1.crossing_number(), 1);
    assert_eq!(t1.length(), 1);

    let f = tangle("1:3,2:4,1':3',2':4'");
    assert!(f.crossing_counts().values().all(|&c| c == 1));
    assert_eq!(f.length(), 4);

    let rev = tangle("1:4',2:3',3:2',4:1'");
    assert_eq!(rev.crossing_number(), 6);
    assert_eq!(rev.length(), 6);
    assert!(rev.check_crossings().is_ok());
}

#[test]
fn identity_and_components() {
    let id = Tangle::identity(3).unwrap();
    assert!(id.is_identity());
    assert_eq!(id.length(), 0);
    assert_eq!(id.n_components(), 3);
    assert_eq!(tangle("1:2,1':2',3:3'").n_components(), 2);
    assert_eq!(tangle("1:1',2:3,2':3'").n_components(), 2);
    assert_eq!(tangle("1:3',2:2',3:1'").n_components(), 1);
}

#[test]
fn replace_edges_patches_crossings() {
    let mut t = tangle("1:3,2:4,1':3',2':4'");
    t.replace_edges(
        &[Edge::new(1, 3), Edge::new(2, 4)],
        &[Edge::new(1, 4), Edge::new(2, 3)],
    )
    .unwrap();
    assert!(t.check_crossings().is_ok());
    assert_eq!(t.crossings_of(Edge::new(1, 4)), 0);
    assert_eq!(t.length(), 4);
    // replacements must reuse the removed labels
    assert!(t
        .replace_edges(&[Edge::new(1, 4)], &[Edge::new(1, 2)])
        .is_err());
    assert!(t
        .replace_edges(&[Edge::new(1, 3)], &[Edge::new(1, 3)])
        .is_err());
}

#[test]
fn replace_edges_rejects_repeated_edges() {
    let mut t = tangle("1:2',2:1',3:3'");
    let e = Edge::new(1, -2);
    assert!(matches!(
        t.replace_edges(&[e, e], &[e]),
        Err(Error::InvalidDiagram(_))
    ));
    assert!(matches!(
        t.replace_edges(&[e], &[e, e]),
        Err(Error::InvalidDiagram(_))
    ));
    assert_eq!(t, tangle("1:2',2:1',3:3'"));
    assert_eq!(t.crossings_of(Edge::new(2, -1)), 1);
    assert!(t.check_crossings().is_ok());
}

#[test]
fn stale_cache_is_reported() {
    let mut t = tangle("1:2',2:1'");
    t.crossings.insert(Edge::new(1, -2), 0);
    assert!(matches!(
        t.check_crossings(),
        Err(Error::StaleCrossings { cached: 0, actual: 1, .. })
    ));
}

#[test]
fn compose_with_t_flips_one_crossing() {
    let mut t = tangle("1:2',2:1',3:3'");
    assert!(t.compose_with_t(1).unwrap());
    assert!(t.is_identity());
    assert!(t.check_crossings().is_ok());

    assert!(!t.compose_with_t(2).unwrap());
    assert_eq!(t, tangle("1:1',2:3',3:2'"));
    assert!(t.check_crossings().is_ok());

    // a hook on the swapped pair is fixed by T_i
    let mut u = tangle("1:2,1':2'");
    assert!(!u.compose_with_t(1).unwrap());
    assert_eq!(u, tangle("1:2,1':2'"));

    assert!(u.compose_with_t(2).is_err());
}

#[test]
fn compose_with_t_canonicalizes_hooks() {
    let mut t = tangle("1:3,2:3',1':2'");
    assert!(t.compose_with_t(2).unwrap());
    assert!(t.edge_set().contains(&Edge::new(1, 2)));
    assert!(t.edge_set().contains(&Edge::new(3, -3)));
    assert!(t.check_crossings().is_ok());
}

#[test]
fn generator_diagrams() {
    assert_eq!(
        Tangle::generator(Generator::U(1), 3).unwrap(),
        tangle("1:2,1':2',3:3'")
    );
    assert_eq!(
        Tangle::generator(Generator::T(2), 3).unwrap(),
        tangle("1:1',2:3',3:2'")
    );
    assert!(matches!(
        Tangle::generator(Generator::T(3), 3),
        Err(Error::GeneratorOutOfRange { index: 3, n: 3 })
    ));
}

#[test]
fn products_of_generators() {
    let u1 = Tangle::generator(Generator::U(1), 3).unwrap();
    let u2 = Tangle::generator(Generator::U(2), 3).unwrap();
    let t1 = Tangle::generator(Generator::T(1), 3).unwrap();

    // U1 U1 = U1 with one loop
    let (p, loops) = u1.compose(&u1).unwrap();
    assert_eq!(p, u1);
    assert_eq!(loops, 1);

    // T1 T1 = 1
    let (p, loops) = t1.compose(&t1).unwrap();
    assert!(p.is_identity());
    assert_eq!(loops, 0);

    // U1 U2 U1 = U1
    let (p, _) = u1.compose(&u2).unwrap();
    let (p, loops) = p.compose(&u1).unwrap();
    assert_eq!(p, u1);
    assert_eq!(loops, 0);

    // T1 U1 = U1
    assert_eq!(t1.compose(&u1).unwrap().0, u1);

    assert!(matches!(
        u1.compose(&Tangle::identity(2).unwrap()),
        Err(Error::SizeMismatch { left: 3, right: 2 })
    ));
}

#[test]
fn apply_acts_on_the_lower_boundary() {
    let id = Tangle::identity(3).unwrap();
    let t = id
        .apply(Generator::T(1))
        .unwrap()
        .apply(Generator::U(2))
        .unwrap();
    // strands 1 -> 2 then 2 caps with 3 below
    assert_eq!(t, tangle("1:3,2:1',2':3'"));
}
