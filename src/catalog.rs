//! Static registry of bullet modifier items
//!
//! Catalog entries are immutable `'static` data; the player holds
//! [`ModifierId`]s and the compositor folds the referenced effect records.
//! The catalog is assumed valid by construction (closed enum, const
//! definitions) - there is no runtime validation pass.

use serde::{Deserialize, Serialize};

/// Shop rarity tier, drives pricing and presentation only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Bullet silhouette hint consumed by rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BulletShape {
    #[default]
    Circle,
    Square,
    Diamond,
    Star,
}

/// Per-item stat deltas. Absent fields contribute nothing.
///
/// Field kinds matter for stacking: `damage`/`speed`/`size`/`fire_rate`/
/// `range` combine by product across held copies, the booleans combine by
/// OR, and `knockback`/`multi_shot`/`spread`/`life_steal` stack additively
/// (`multi_shot` is based at 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffectSet {
    pub damage: Option<f32>,
    pub speed: Option<f32>,
    pub size: Option<f32>,
    pub fire_rate: Option<f32>,
    pub range: Option<f32>,
    pub piercing: bool,
    pub homing: bool,
    pub splitting: bool,
    pub bouncing: bool,
    pub explosive: bool,
    pub poison: bool,
    pub freeze: bool,
    pub knockback: f32,
    pub multi_shot: Option<u32>,
    pub spread: f32,
    pub life_steal: f32,
}

impl EffectSet {
    pub const NONE: EffectSet = EffectSet {
        damage: None,
        speed: None,
        size: None,
        fire_rate: None,
        range: None,
        piercing: false,
        homing: false,
        splitting: false,
        bouncing: false,
        explosive: false,
        poison: false,
        freeze: false,
        knockback: 0.0,
        multi_shot: None,
        spread: 0.0,
        life_steal: 0.0,
    };
}

/// Per-item visual hints; `color`/`shape` are last-writer-wins when
/// stacked, the booleans are OR, `size` is multiplicative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualHints {
    pub color: Option<u32>,
    pub trail: bool,
    pub glow: bool,
    pub particles: bool,
    pub size: Option<f32>,
    pub shape: Option<BulletShape>,
}

impl VisualHints {
    pub const NONE: VisualHints = VisualHints {
        color: None,
        trail: false,
        glow: false,
        particles: false,
        size: None,
        shape: None,
    };
}

/// A catalog item definition
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Modifier {
    pub id: ModifierId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Display accent color, packed 0xRRGGBB
    pub color: u32,
    pub price: u32,
    pub rarity: Rarity,
    pub effects: EffectSet,
    pub visual: VisualHints,
}

/// Catalog identity. Order matches [`CATALOG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierId {
    DamageUp,
    SpeedUp,
    PiercingShots,
    HomingTears,
    MultiShot,
    ExplosiveShots,
    PoisonTears,
    FreezeShot,
    BouncingTears,
    SplittingShot,
    RapidFire,
    GiantTears,
    LifeSteal,
    KnockbackShot,
    DiamondTears,
    StarShot,
}

impl ModifierId {
    pub const ALL: [ModifierId; 16] = [
        ModifierId::DamageUp,
        ModifierId::SpeedUp,
        ModifierId::PiercingShots,
        ModifierId::HomingTears,
        ModifierId::MultiShot,
        ModifierId::ExplosiveShots,
        ModifierId::PoisonTears,
        ModifierId::FreezeShot,
        ModifierId::BouncingTears,
        ModifierId::SplittingShot,
        ModifierId::RapidFire,
        ModifierId::GiantTears,
        ModifierId::LifeSteal,
        ModifierId::KnockbackShot,
        ModifierId::DiamondTears,
        ModifierId::StarShot,
    ];

    /// Look up the static definition for this id
    #[inline]
    pub fn def(self) -> &'static Modifier {
        &CATALOG[self as usize]
    }
}

/// The full item registry, indexed by `ModifierId` discriminant
pub static CATALOG: [Modifier; 16] = [
    Modifier {
        id: ModifierId::DamageUp,
        name: "Damage Up",
        description: "Increases bullet damage",
        icon: "💪",
        color: 0xff4444,
        price: 15,
        rarity: Rarity::Common,
        effects: EffectSet {
            damage: Some(2.0),
            ..EffectSet::NONE
        },
        visual: VisualHints {
            color: Some(0xff4444),
            glow: true,
            ..VisualHints::NONE
        },
    },
    Modifier {
        id: ModifierId::SpeedUp,
        name: "Speed Up",
        description: "Increases bullet speed",
        icon: "⚡",
        color: 0x44ff44,
        price: 12,
        rarity: Rarity::Common,
        effects: EffectSet {
            speed: Some(1.5),
            ..EffectSet::NONE
        },
        visual: VisualHints {
            color: Some(0x44ff44),
            trail: true,
            ..VisualHints::NONE
        },
    },
    Modifier {
        id: ModifierId::PiercingShots,
        name: "Piercing Shots",
        description: "Bullets pierce through enemies",
        icon: "🏹",
        color: 0x4444ff,
        price: 25,
        rarity: Rarity::Rare,
        effects: EffectSet {
            piercing: true,
            ..EffectSet::NONE
        },
        visual: VisualHints {
            color: Some(0x4444ff),
            trail: true,
            ..VisualHints::NONE
        },
    },
    Modifier {
        id: ModifierId::HomingTears,
        name: "Homing Tears",
        description: "Bullets home in on enemies",
        icon: "🎯",
        color: 0xff44ff,
        price: 30,
        rarity: Rarity::Rare,
        effects: EffectSet {
            homing: true,
            ..EffectSet::NONE
        },
        visual: VisualHints {
            color: Some(0xff44ff),
            particles: true,
            ..VisualHints::NONE
        },
    },
    Modifier {
        id: ModifierId::MultiShot,
        name: "Multi Shot",
        description: "Fire multiple bullets at once",
        icon: "🔫",
        color: 0xffff44,
        price: 35,
        rarity: Rarity::Rare,
        effects: EffectSet {
            multi_shot: Some(3),
            spread: 0.3,
            ..EffectSet::NONE
        },
        visual: VisualHints {
            color: Some(0xffff44),
            ..VisualHints::NONE
        },
    },
    Modifier {
        id: ModifierId::ExplosiveShots,
        name: "Explosive Shots",
        description: "Bullets explode on impact",
        icon: "💥",
        color: 0xff8844,
        price: 45,
        rarity: Rarity::Epic,
        effects: EffectSet {
            explosive: true,
            damage: Some(1.5),
            ..EffectSet::NONE
        },
        visual: VisualHints {
            color: Some(0xff8844),
            glow: true,
            size: Some(1.2),
            ..VisualHints::NONE
        },
    },
    Modifier {
        id: ModifierId::PoisonTears,
        name: "Poison Tears",
        description: "Bullets poison enemies over time",
        icon: "☠️",
        color: 0x44ff88,
        price: 20,
        rarity: Rarity::Common,
        effects: EffectSet {
            poison: true,
            ..EffectSet::NONE
        },
        visual: VisualHints {
            color: Some(0x44ff88),
            particles: true,
            ..VisualHints::NONE
        },
    },
    Modifier {
        id: ModifierId::FreezeShot,
        name: "Freeze Shot",
        description: "Bullets freeze enemies temporarily",
        icon: "❄️",
        color: 0x88ddff,
        price: 22,
        rarity: Rarity::Common,
        effects: EffectSet {
            freeze: true,
            ..EffectSet::NONE
        },
        visual: VisualHints {
            color: Some(0x88ddff),
            glow: true,
            ..VisualHints::NONE
        },
    },
    Modifier {
        id: ModifierId::BouncingTears,
        name: "Bouncing Tears",
        description: "Bullets bounce off walls",
        icon: "⚾",
        color: 0xff88ff,
        price: 28,
        rarity: Rarity::Rare,
        effects: EffectSet {
            bouncing: true,
            range: Some(1.5),
            ..EffectSet::NONE
        },
        visual: VisualHints {
            color: Some(0xff88ff),
            trail: true,
            ..VisualHints::NONE
        },
    },
    Modifier {
        id: ModifierId::SplittingShot,
        name: "Splitting Shot",
        description: "Bullets split into smaller bullets on impact",
        icon: "🌟",
        color: 0xffaa44,
        price: 40,
        rarity: Rarity::Epic,
        effects: EffectSet {
            splitting: true,
            damage: Some(0.8),
            ..EffectSet::NONE
        },
        visual: VisualHints {
            color: Some(0xffaa44),
            particles: true,
            ..VisualHints::NONE
        },
    },
    Modifier {
        id: ModifierId::RapidFire,
        name: "Rapid Fire",
        description: "Greatly increases fire rate",
        icon: "🔥",
        color: 0xff6644,
        price: 32,
        rarity: Rarity::Rare,
        effects: EffectSet {
            fire_rate: Some(2.5),
            ..EffectSet::NONE
        },
        visual: VisualHints {
            color: Some(0xff6644),
            trail: true,
            ..VisualHints::NONE
        },
    },
    Modifier {
        id: ModifierId::GiantTears,
        name: "Giant Tears",
        description: "Massive bullets with increased damage",
        icon: "🔴",
        color: 0xaa44ff,
        price: 50,
        rarity: Rarity::Epic,
        effects: EffectSet {
            size: Some(2.0),
            damage: Some(3.0),
            speed: Some(0.7),
            ..EffectSet::NONE
        },
        visual: VisualHints {
            size: Some(2.0),
            color: Some(0xaa44ff),
            glow: true,
            ..VisualHints::NONE
        },
    },
    Modifier {
        id: ModifierId::LifeSteal,
        name: "Life Steal",
        description: "Bullets heal you when they hit enemies",
        icon: "❤️",
        color: 0xff4488,
        price: 60,
        rarity: Rarity::Legendary,
        effects: EffectSet {
            life_steal: 0.1,
            ..EffectSet::NONE
        },
        visual: VisualHints {
            color: Some(0xff4488),
            glow: true,
            particles: true,
            ..VisualHints::NONE
        },
    },
    Modifier {
        id: ModifierId::KnockbackShot,
        name: "Knockback Shot",
        description: "Bullets knock enemies back",
        icon: "👊",
        color: 0x8844ff,
        price: 18,
        rarity: Rarity::Common,
        effects: EffectSet {
            knockback: 5.0,
            damage: Some(1.2),
            ..EffectSet::NONE
        },
        visual: VisualHints {
            color: Some(0x8844ff),
            glow: true,
            ..VisualHints::NONE
        },
    },
    Modifier {
        id: ModifierId::DiamondTears,
        name: "Diamond Tears",
        description: "Sharp diamond-shaped bullets",
        icon: "💎",
        color: 0x44ffff,
        price: 38,
        rarity: Rarity::Rare,
        effects: EffectSet {
            damage: Some(1.5),
            piercing: true,
            ..EffectSet::NONE
        },
        visual: VisualHints {
            shape: Some(BulletShape::Diamond),
            color: Some(0x44ffff),
            glow: true,
            ..VisualHints::NONE
        },
    },
    Modifier {
        id: ModifierId::StarShot,
        name: "Star Shot",
        description: "Star-shaped bullets with special properties",
        icon: "⭐",
        color: 0xffff88,
        price: 42,
        rarity: Rarity::Epic,
        effects: EffectSet {
            damage: Some(1.3),
            multi_shot: Some(2),
            spread: 0.2,
            ..EffectSet::NONE
        },
        visual: VisualHints {
            shape: Some(BulletShape::Star),
            color: Some(0xffff88),
            particles: true,
            ..VisualHints::NONE
        },
    },
];
