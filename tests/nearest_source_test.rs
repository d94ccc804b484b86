use raceway_sim::audio_engine::nearest::nearest_source;
use raceway_sim::fixed_math::Fx;
use raceway_sim::motion_engine::types::OpponentCar;

fn car(x: f32, z: f32, active: bool) -> OpponentCar {
    OpponentCar {
        x: Fx::from_num(x),
        z: Fx::from_num(z),
        active,
        ..Default::default()
    }
}

#[test]
fn test_nearest_source_picks_minimum_absolute_depth() {
    // z = {150, -30, 80} → la source en -30 (|z| minimal) gagne
    let cars = [
        car(0.0, 150.0, true),
        car(1.0, -30.0, true),
        car(2.0, 80.0, true),
    ];
    let nearest = nearest_source(cars.iter()).unwrap();
    assert_eq!(nearest.z, Fx::from_num(-30));
}

#[test]
fn test_nearest_source_ignores_inactive_slots() {
    // Le slot inactif le plus proche ne doit jamais être sélectionné
    let cars = [car(0.0, 10.0, false), car(1.0, 50.0, true)];
    let nearest = nearest_source(cars.iter()).unwrap();
    assert_eq!(nearest.z, Fx::from_num(50));
}

#[test]
fn test_nearest_source_none_when_no_active_source() {
    let empty: [OpponentCar; 0] = [];
    assert!(nearest_source(empty.iter()).is_none());

    let all_inactive = [car(0.0, 10.0, false), car(1.0, 20.0, false)];
    assert!(nearest_source(all_inactive.iter()).is_none());
}

#[test]
fn test_nearest_source_tie_first_scanned_wins() {
    // |30| == |-30| : la première source rencontrée gagne (ordre de scan)
    let cars = [car(7.0, 30.0, true), car(9.0, -30.0, true)];
    let nearest = nearest_source(cars.iter()).unwrap();
    assert_eq!(nearest.x, Fx::from_num(7));
}
