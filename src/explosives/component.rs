//! Detonation component
//!
//! The per-item state and the two entry points of the core: damage
//! interception (probabilistic trigger) and the detonation procedure
//! itself. The manual trigger command calls the same procedure, so the
//! two paths cannot drift apart.

use std::sync::Arc;

use hecs::{Entity, World};
use rand::Rng;

use super::effect::{AreaEffectRequest, ExplosionHost};
use super::profile::DetonationProfile;
use crate::combat::DamageInfo;
use crate::items::holder::{resolve_origin, wearer_of};
use crate::items::item::{Durability, Item};
use crate::world::Map;

/// Attached to every item instance of an explosive type.
///
/// The item entity owns the component; it is created with the item and
/// goes away with it. Once a detonation has run, the latch keeps the
/// component from ever triggering again.
#[derive(Debug, Clone)]
pub struct DetonationComponent {
    /// Shared per-type configuration
    pub profile: Arc<DetonationProfile>,
    detonated: bool,
}

impl DetonationComponent {
    pub fn new(profile: Arc<DetonationProfile>) -> Self {
        Self {
            profile,
            detonated: false,
        }
    }

    pub fn has_detonated(&self) -> bool {
        self.detonated
    }
}

/// What happened to an incoming damage application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageResponse {
    /// The item detonated and fully absorbed the hit; the host must not
    /// apply the original damage on top of the explosion.
    Absorbed,
    /// Leave the damage for normal resolution.
    PassThrough,
}

impl DamageResponse {
    pub fn is_absorbed(&self) -> bool {
        matches!(self, DamageResponse::Absorbed)
    }
}

/// Decide whether a hit sets the item off, given an explicit random roll.
///
/// A hit big enough to destroy the item outright always detonates it.
/// Below that, the item detonates iff `roll > stability * current / max`:
/// as hit points fall the threshold shrinks, so a battered item is more
/// likely to go up. When stability exceeds `max / current` the threshold
/// sits above 1 and no roll can beat it; that makes probabilistic
/// detonation impossible until the item is worn down further, which is
/// intentional. Do not clamp the threshold.
pub fn would_detonate(
    damage: &DamageInfo,
    current_hp: i32,
    max_hp: i32,
    stability: f32,
    roll: f32,
) -> bool {
    if !damage.external_violence {
        return false;
    }
    if damage.amount >= current_hp {
        return true;
    }
    roll > stability * current_hp as f32 / max_hp as f32
}

/// Decide whether a hit sets the item off, drawing a uniform roll in [0, 1).
pub fn evaluate_trigger(
    damage: &DamageInfo,
    current_hp: i32,
    max_hp: i32,
    stability: f32,
    rng: &mut impl Rng,
) -> bool {
    would_detonate(damage, current_hp, max_hp, stability, rng.gen::<f32>())
}

/// Intercept an impending damage application against an explosive item.
///
/// Returns `Absorbed` when the item detonated instead of taking the hit;
/// the explosion supersedes the original damage. Everything else is
/// `PassThrough` and the host resolves the damage normally.
pub fn handle_damage(
    world: &mut World,
    map: &Map,
    item: Entity,
    damage: &DamageInfo,
    host: &mut dyn ExplosionHost,
    rng: &mut impl Rng,
) -> DamageResponse {
    if !damage.external_violence {
        return DamageResponse::PassThrough;
    }

    let (current_hp, max_hp, stability) = {
        let component = match world.get::<&DetonationComponent>(item) {
            Ok(component) => component,
            Err(_) => return DamageResponse::PassThrough,
        };
        if component.has_detonated() {
            return DamageResponse::PassThrough;
        }
        let durability = match world.get::<&Durability>(item) {
            Ok(durability) => durability,
            Err(_) => return DamageResponse::PassThrough,
        };
        if durability.is_destroyed() {
            return DamageResponse::PassThrough;
        }
        (durability.current, durability.max, component.profile.stability)
    };

    if evaluate_trigger(damage, current_hp, max_hp, stability, rng) {
        detonate(world, map, item, host);
        DamageResponse::Absorbed
    } else {
        DamageResponse::PassThrough
    }
}

/// Execute the detonation.
///
/// Shared by the automatic trigger and the manual command. Aborts as a
/// logged no-op when the item has no resolvable location; that is an
/// expected edge case (an item destroyed while unplaced), never an error.
pub fn detonate(world: &mut World, map: &Map, item: Entity, host: &mut dyn ExplosionHost) {
    let (profile, already_detonated) = {
        let component = match world.get::<&DetonationComponent>(item) {
            Ok(component) => component,
            Err(_) => return,
        };
        (Arc::clone(&component.profile), component.has_detonated())
    };
    if already_detonated {
        log::debug!("ignored repeat detonation of {:?}", item);
        return;
    }

    let worn = wearer_of(world, item).is_some();
    let Some((_subject, origin)) = resolve_origin(world, item) else {
        log::warn!("tried to detonate {:?} with no resolvable location", item);
        return;
    };
    if !map.in_bounds(origin) {
        log::warn!("tried to detonate {:?} outside the map at {:?}", item, origin);
        return;
    }

    // The item is consumed by its own blast, but never destroyed twice.
    if let Ok(mut durability) = world.get::<&mut Durability>(item) {
        if !durability.is_destroyed() {
            durability.destroy();
        }
    }
    if let Ok(mut component) = world.get::<&mut DetonationComponent>(item) {
        component.detonated = true;
    }

    let stack_count = world.get::<&Item>(item).map(|i| i.stack_count).unwrap_or(1);
    let radius = profile.effective_radius(worn, stack_count);

    if let Some(effect) = &profile.visual_effect {
        let handle = host.spawn_effect(effect, origin);
        host.trigger_effect(handle, origin);
        host.cleanup_effect(handle);
    }

    host.execute_area_effect(AreaEffectRequest {
        origin,
        radius,
        damage_kind: profile.damage_kind,
        source: item,
        pre_spawn: profile.pre_spawn.clone(),
        post_spawn: profile.post_spawn.clone(),
        damages_cell_neighbors: profile.damages_explosion_cell_neighbors,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::DamageKind;
    use crate::ecs::{Health, Name, Position};
    use crate::explosives::effect::RecordingHost;
    use crate::explosives::profile::SpawnSpec;
    use crate::items::equipment::{equip_item, EquipSlot, Equipment};
    use crate::items::holder::Holder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn vest_profile() -> DetonationProfile {
        let mut profile = DetonationProfile::new(1.9, DamageKind::Bomb);
        profile.stability = 1.1;
        profile
    }

    fn spawn_vest(world: &mut World, profile: DetonationProfile, pos: Option<Position>) -> Entity {
        let item = world.spawn((
            Item::new("suicide_vest", "Suicide Vest"),
            Durability::new(100),
            Holder::Loose,
            DetonationComponent::new(Arc::new(profile)),
        ));
        if let Some(pos) = pos {
            let _ = world.insert_one(item, pos);
        }
        item
    }

    fn hit(amount: i32) -> DamageInfo {
        DamageInfo::new(DamageKind::Cut, amount)
    }

    #[test]
    fn test_scenario_a_full_health_never_probabilistic() {
        // threshold = 1.1 * 100/100 = 1.1, no roll can beat it
        assert!(!would_detonate(&hit(50), 100, 100, 1.1, 0.05));
        assert!(!would_detonate(&hit(50), 100, 100, 1.1, 0.999));
    }

    #[test]
    fn test_scenario_b_worn_down_item_detonates() {
        // threshold = 1.1 * 10/100 = 0.11
        assert!(would_detonate(&hit(5), 10, 100, 1.1, 0.5));
        assert!(!would_detonate(&hit(5), 10, 100, 1.1, 0.05));
    }

    #[test]
    fn test_scenario_c_overkill_forces_detonation() {
        assert!(would_detonate(&hit(120), 80, 100, 1.1, 0.0));
        assert!(would_detonate(&hit(120), 80, 100, 1000.0, 0.0));
        // exact kill counts too
        assert!(would_detonate(&hit(80), 80, 100, 1000.0, 0.0));
    }

    #[test]
    fn test_non_violence_never_detonates() {
        let rot = DamageInfo::ambient(DamageKind::Burn, 500);
        assert!(!would_detonate(&rot, 10, 100, 0.01, 0.999));
    }

    #[test]
    fn test_detonation_probability_matches_formula() {
        // P(detonate) = 1 - stability * current / max for thresholds in [0, 1]
        let mut rng = StdRng::seed_from_u64(0xC1DE);
        let damage = hit(10);
        let (current, max, stability) = (40, 100, 1.1);
        let expected = 1.0 - (stability * current as f32 / max as f32);

        let trials = 20_000;
        let mut detonations = 0;
        for _ in 0..trials {
            if evaluate_trigger(&damage, current, max, stability, &mut rng) {
                detonations += 1;
            }
        }
        let observed = detonations as f32 / trials as f32;
        assert!(
            (observed - expected).abs() < 0.01,
            "observed {} expected {}",
            observed,
            expected
        );
    }

    #[test]
    fn test_overkill_is_deterministic_across_trials() {
        let mut rng = StdRng::seed_from_u64(7);
        let damage = hit(200);
        for _ in 0..1_000 {
            assert!(evaluate_trigger(&damage, 80, 100, 5.0, &mut rng));
        }
    }

    #[test]
    fn test_handle_damage_absorbs_on_detonation() {
        let mut world = World::new();
        let map = Map::open(20, 20);
        let mut host = RecordingHost::new();
        let mut rng = StdRng::seed_from_u64(1);

        let item = spawn_vest(&mut world, vest_profile(), Some(Position::new(3, 3)));
        // overkill hit forces the trigger
        let response = handle_damage(&mut world, &map, item, &hit(500), &mut host, &mut rng);

        assert_eq!(response, DamageResponse::Absorbed);
        assert_eq!(host.area_effects.len(), 1);
        assert!(world.get::<&Durability>(item).unwrap().is_destroyed());
        assert!(world.get::<&DetonationComponent>(item).unwrap().has_detonated());
    }

    #[test]
    fn test_handle_damage_passes_through_ambient() {
        let mut world = World::new();
        let map = Map::open(20, 20);
        let mut host = RecordingHost::new();
        let mut rng = StdRng::seed_from_u64(1);

        let item = spawn_vest(&mut world, vest_profile(), Some(Position::new(3, 3)));
        let rot = DamageInfo::ambient(DamageKind::Burn, 500);
        let response = handle_damage(&mut world, &map, item, &rot, &mut host, &mut rng);

        assert_eq!(response, DamageResponse::PassThrough);
        assert!(host.area_effects.is_empty());
        assert!(!world.get::<&Durability>(item).unwrap().is_destroyed());
    }

    #[test]
    fn test_scenario_d_worn_detonation_anchors_at_wearer() {
        let mut world = World::new();
        let map = Map::open(20, 20);
        let mut host = RecordingHost::new();

        let wearer = world.spawn((
            Name::new("Harrow"),
            Health::new(30),
            Position::new(12, 4),
            Equipment::new(),
        ));
        let item = spawn_vest(&mut world, vest_profile(), Some(Position::new(1, 1)));
        equip_item(&mut world, wearer, item, EquipSlot::Torso);

        detonate(&mut world, &map, item, &mut host);

        assert_eq!(host.area_effects.len(), 1);
        assert_eq!(host.area_effects[0].origin, Position::new(12, 4));
    }

    #[test]
    fn test_unplaced_detonation_is_a_noop() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut world = World::new();
        let map = Map::open(20, 20);
        let mut host = RecordingHost::new();

        let item = spawn_vest(&mut world, vest_profile(), None);
        detonate(&mut world, &map, item, &mut host);

        assert!(host.area_effects.is_empty());
        assert!(host.spawned_effects.is_empty());
        assert!(!world.get::<&Durability>(item).unwrap().is_destroyed());
        assert!(!world.get::<&DetonationComponent>(item).unwrap().has_detonated());
    }

    #[test]
    fn test_out_of_bounds_detonation_is_a_noop() {
        let mut world = World::new();
        let map = Map::open(5, 5);
        let mut host = RecordingHost::new();

        let item = spawn_vest(&mut world, vest_profile(), Some(Position::new(40, 40)));
        detonate(&mut world, &map, item, &mut host);

        assert!(host.area_effects.is_empty());
        assert!(!world.get::<&Durability>(item).unwrap().is_destroyed());
    }

    #[test]
    fn test_detonation_is_not_retriggerable() {
        let mut world = World::new();
        let map = Map::open(20, 20);
        let mut host = RecordingHost::new();
        let mut rng = StdRng::seed_from_u64(1);

        let item = spawn_vest(&mut world, vest_profile(), Some(Position::new(3, 3)));
        detonate(&mut world, &map, item, &mut host);
        detonate(&mut world, &map, item, &mut host);
        let response = handle_damage(&mut world, &map, item, &hit(500), &mut host, &mut rng);

        assert_eq!(host.area_effects.len(), 1);
        assert_eq!(response, DamageResponse::PassThrough);
    }

    #[test]
    fn test_unworn_stack_grows_radius() {
        let mut world = World::new();
        let map = Map::open(20, 20);
        let mut host = RecordingHost::new();

        let mut profile = DetonationProfile::new(1.9, DamageKind::Bomb);
        profile.radius_growth_per_extra_unit = 0.8;
        let item = world.spawn((
            Item {
                template_id: "blasting_charge".to_string(),
                name: "Blasting Charge".to_string(),
                stack_count: 10,
                max_stack: 25,
            },
            Durability::new(60),
            Holder::Loose,
            Position::new(8, 8),
            DetonationComponent::new(Arc::new(profile)),
        ));

        detonate(&mut world, &map, item, &mut host);

        let expected = 1.9 + (9.0 * 0.8_f32).sqrt();
        assert_eq!(host.area_effects[0].radius, expected);
    }

    #[test]
    fn test_visual_effect_runs_before_blast_and_is_cleaned_up() {
        let mut world = World::new();
        let map = Map::open(20, 20);
        let mut host = RecordingHost::new();

        let mut profile = vest_profile();
        profile.visual_effect = Some("blast_flash".to_string());
        profile.pre_spawn = Some(SpawnSpec {
            entity_kind: "smoke".to_string(),
            chance: 0.6,
            count: 2,
        });
        let item = spawn_vest(&mut world, profile, Some(Position::new(3, 3)));

        detonate(&mut world, &map, item, &mut host);

        assert_eq!(host.spawned_effects.len(), 1);
        assert_eq!(host.spawned_effects[0].0, "blast_flash");
        assert_eq!(host.triggered_effects, host.cleaned_effects);
        let request = &host.area_effects[0];
        assert_eq!(request.pre_spawn.as_ref().unwrap().entity_kind, "smoke");
        assert_eq!(request.pre_spawn.as_ref().unwrap().count, 2);
    }

    #[test]
    fn test_already_destroyed_item_still_detonates_once() {
        let mut world = World::new();
        let map = Map::open(20, 20);
        let mut host = RecordingHost::new();

        let item = spawn_vest(&mut world, vest_profile(), Some(Position::new(3, 3)));
        world.get::<&mut Durability>(item).unwrap().destroy();

        detonate(&mut world, &map, item, &mut host);

        assert_eq!(host.area_effects.len(), 1);
        assert!(world.get::<&Durability>(item).unwrap().is_destroyed());
    }
}
