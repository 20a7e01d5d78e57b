//! Built-in named color table, grouped by category
//!
//! Entries keep their original order: the nearest-color search returns the
//! first entry on ties, so reordering this table changes results.

use crate::color::Rgb;

/// (category, [(name, color)])
pub(super) type CategoryTable = (&'static str, &'static [(&'static str, Rgb)]);

pub(super) static CATEGORIES: &[CategoryTable] = &[
    (
        "Reds",
        &[
            ("BeanRed", Rgb::new(0xF7, 0x5D, 0x59)),
            ("BlackBean", Rgb::new(0x3D, 0x0C, 0x02)),
            ("BloodNight", Rgb::new(0x55, 0x16, 0x06)),
            ("Burgundy", Rgb::new(0x8C, 0x00, 0x1A)),
            ("CarbonRed", Rgb::new(0xA7, 0x0D, 0x2A)),
            ("CherryRed", Rgb::new(0xC2, 0x46, 0x41)),
            ("ChilliPepper", Rgb::new(0xC1, 0x1B, 0x17)),
            ("ChocolateBrown", Rgb::new(0x3F, 0x00, 0x0F)),
            ("Cranberry", Rgb::new(0x9F, 0x00, 0x0F)),
            ("Crimson", Rgb::new(0xDC, 0x14, 0x3C)),
            ("CrimsonRed", Rgb::new(0x99, 0x00, 0x00)),
            ("DarkBurgundy", Rgb::new(0x80, 0x00, 0x20)),
            ("DarkMaroon", Rgb::new(0x2F, 0x09, 0x09)),
            ("DarkRed", Rgb::new(0x8B, 0x00, 0x00)),
            ("DarkSalmon", Rgb::new(0xE9, 0x96, 0x7A)),
            ("DarkScarlet", Rgb::new(0x56, 0x03, 0x19)),
            ("DeepRed", Rgb::new(0x80, 0x05, 0x17)),
            ("FerrariRed", Rgb::new(0xF7, 0x0D, 0x1A)),
            ("FireBrick", Rgb::new(0xB2, 0x22, 0x22)),
            ("FireEngineRed", Rgb::new(0xF6, 0x28, 0x17)),
            ("GarnetRed", Rgb::new(0x73, 0x36, 0x35)),
            ("Grapefruit", Rgb::new(0xDC, 0x38, 0x1F)),
            ("IndianRed", Rgb::new(0xCD, 0x5C, 0x5C)),
            ("LavaRed", Rgb::new(0xE4, 0x22, 0x17)),
            ("LightCoral", Rgb::new(0xF0, 0x80, 0x80)),
            ("LoveRed", Rgb::new(0xE4, 0x1B, 0x17)),
            ("MaroonRed", Rgb::new(0x8F, 0x0B, 0x0B)),
            ("Midnight", Rgb::new(0x2B, 0x1B, 0x17)),
            ("NeonRed", Rgb::new(0xFD, 0x1C, 0x03)),
            ("PastelRed", Rgb::new(0xF6, 0x72, 0x80)),
            ("PinkCoral", Rgb::new(0xE7, 0x74, 0x71)),
            ("Red", Rgb::new(0xFF, 0x00, 0x00)),
            ("RedBlood", Rgb::new(0x66, 0x00, 0x00)),
            ("RedWine", Rgb::new(0x99, 0x00, 0x12)),
            ("RubyRed", Rgb::new(0xF6, 0x22, 0x17)),
            ("SaffronRed", Rgb::new(0x93, 0x13, 0x14)),
            ("Salmon", Rgb::new(0xFA, 0x80, 0x72)),
            ("ScarletRed", Rgb::new(0xFF, 0x24, 0x00)),
            ("ShockingOrange", Rgb::new(0xE5, 0x5B, 0x3C)),
            ("StrawberryRed", Rgb::new(0xC8, 0x3F, 0x49)),
            ("TomatoSauceRed", Rgb::new(0xB2, 0x18, 0x07)),
            ("ValentineRed", Rgb::new(0xE5, 0x54, 0x51)),
            ("Vermilion", Rgb::new(0x7E, 0x19, 0x1B)),
        ],
    ),
    (
        "Pinks",
        &[
            ("BlossomPink", Rgb::new(0xF9, 0xB7, 0xFF)),
            ("BlushPink", Rgb::new(0xE6, 0xA9, 0xEC)),
            ("CottonCandy", Rgb::new(0xFC, 0xDF, 0xFF)),
            ("DarkRaspberry", Rgb::new(0x87, 0x26, 0x57)),
            ("DeepPeach", Rgb::new(0xFF, 0xCB, 0xA4)),
            ("DeepPink", Rgb::new(0xFF, 0x14, 0x93)),
            ("DesertSand", Rgb::new(0xED, 0xC9, 0xAF)),
            ("DullPurple", Rgb::new(0x7F, 0x52, 0x5D)),
            ("DuskyPink", Rgb::new(0xCC, 0x7A, 0x8B)),
            ("DustyPink", Rgb::new(0xD5, 0x8A, 0x94)),
            ("DustyRose", Rgb::new(0xC9, 0xA9, 0xA6)),
            ("GoldPink", Rgb::new(0xE6, 0xC7, 0xC2)),
            ("HotPink", Rgb::new(0xFF, 0x69, 0xB4)),
            ("KhakiRose", Rgb::new(0xC5, 0x90, 0x8E)),
            ("LightPink", Rgb::new(0xFF, 0xB6, 0xC1)),
            ("LipstickPink", Rgb::new(0xC4, 0x87, 0x93)),
            ("MediumVioletRed", Rgb::new(0xC7, 0x15, 0x85)),
            ("OldRose", Rgb::new(0xC0, 0x80, 0x81)),
            ("PaleVioletRed", Rgb::new(0xDB, 0x70, 0x93)),
            ("PastelBrown", Rgb::new(0xB1, 0x90, 0x7F)),
            ("PastelOrange", Rgb::new(0xF8, 0xB8, 0x8B)),
            ("PastelPurple", Rgb::new(0xF2, 0xA2, 0xE8)),
            ("PeriwinklePink", Rgb::new(0xE9, 0xCF, 0xEC)),
            ("PigPink", Rgb::new(0xFD, 0xD7, 0xE4)),
            ("Pink", Rgb::new(0xFF, 0xC0, 0xCB)),
            ("PinkBrown", Rgb::new(0xC4, 0x81, 0x89)),
            ("PinkDaisy", Rgb::new(0xE7, 0x99, 0xA3)),
            ("PlumPie", Rgb::new(0x7D, 0x05, 0x41)),
            ("PlumVelvet", Rgb::new(0x7D, 0x05, 0x52)),
            ("Puce", Rgb::new(0x7F, 0x5A, 0x58)),
            ("PurpleLily", Rgb::new(0x55, 0x0A, 0x35)),
            ("PurpleMaroon", Rgb::new(0x81, 0x05, 0x41)),
            ("PurpleThistle", Rgb::new(0xD2, 0xB9, 0xD3)),
            ("Rose", Rgb::new(0xE8, 0xAD, 0xAA)),
            ("RoseDust", Rgb::new(0x99, 0x70, 0x70)),
            ("RoseGold", Rgb::new(0xEC, 0xC5, 0xC0)),
            ("Rosy-Finch", Rgb::new(0x7F, 0x4E, 0x52)),
            ("RosyPink", Rgb::new(0xB3, 0x84, 0x81)),
            ("SilverPink", Rgb::new(0xC4, 0xAE, 0xAD)),
            ("UnbleachedSilk", Rgb::new(0xFF, 0xDD, 0xCA)),
            ("VelvetMaroon", Rgb::new(0x7E, 0x35, 0x4D)),
            ("VioletRed", Rgb::new(0xF6, 0x35, 0x8A)),
            ("WatermelonPink", Rgb::new(0xFC, 0x6C, 0x85)),
            ("WisteriaPurple", Rgb::new(0xC6, 0xAE, 0xC7)),
        ],
    ),
    (
        "Oranges",
        &[
            ("BasketBallOrange", Rgb::new(0xF8, 0x81, 0x58)),
            ("ConstructionConeOrange", Rgb::new(0xF8, 0x74, 0x31)),
            ("Coral", Rgb::new(0xFF, 0x7F, 0x50)),
            ("DarkOrange", Rgb::new(0xFF, 0x8C, 0x00)),
            ("IndianSaffron", Rgb::new(0xFF, 0x77, 0x22)),
            ("LightCopper", Rgb::new(0xDA, 0x8A, 0x67)),
            ("LightSalmon", Rgb::new(0xFF, 0xA0, 0x7A)),
            ("LightSalmonRose", Rgb::new(0xF9, 0x96, 0x6B)),
            ("MangoOrange", Rgb::new(0xFF, 0x80, 0x40)),
            ("Orange", Rgb::new(0xFF, 0xA5, 0x00)),
            ("OrangeRed", Rgb::new(0xFF, 0x45, 0x00)),
            ("PinkOrange", Rgb::new(0xF8, 0x98, 0x80)),
            ("SalmonPink", Rgb::new(0xFF, 0x86, 0x74)),
            ("SunriseOrange", Rgb::new(0xE6, 0x74, 0x51)),
            ("Tangerine", Rgb::new(0xE7, 0x8A, 0x61)),
            ("Tomato", Rgb::new(0xFF, 0x63, 0x47)),
        ],
    ),
    (
        "Yellows",
        &[
            ("Amber", Rgb::new(0xFF, 0xBF, 0x00)),
            ("BananaYellow", Rgb::new(0xF5, 0xE2, 0x16)),
            ("Beer", Rgb::new(0xFB, 0xB1, 0x17)),
            ("Blonde", Rgb::new(0xFB, 0xF6, 0xD9)),
            ("BoldYellow", Rgb::new(0xF9, 0xDB, 0x24)),
            ("BrightGold", Rgb::new(0xFD, 0xD0, 0x17)),
            ("BrownSugar", Rgb::new(0xE2, 0xA7, 0x6F)),
            ("CamelBrown", Rgb::new(0xC1, 0x9A, 0x6B)),
            ("CanaryYellow", Rgb::new(0xFF, 0xEF, 0x00)),
            ("Cantaloupe", Rgb::new(0xFF, 0xA6, 0x2F)),
            ("CardboardBrown", Rgb::new(0xED, 0xDA, 0x74)),
            ("Champagne", Rgb::new(0xF7, 0xE7, 0xCE)),
            ("CheeseOrange", Rgb::new(0xFF, 0xA6, 0x00)),
            ("ChromeGold", Rgb::new(0xFF, 0xCE, 0x44)),
            ("CoralPeach", Rgb::new(0xFB, 0xD5, 0xAB)),
            ("CornYellow", Rgb::new(0xFF, 0xF3, 0x80)),
            ("Cream", Rgb::new(0xFF, 0xFF, 0xCC)),
            ("CreamWhite", Rgb::new(0xFF, 0xFD, 0xD0)),
            ("DarkBlonde", Rgb::new(0xF0, 0xE2, 0xB6)),
            ("DarkKhaki", Rgb::new(0xBD, 0xB7, 0x6B)),
            ("DeepYellow", Rgb::new(0xF6, 0xBE, 0x00)),
            ("DirtyWhite", Rgb::new(0xE8, 0xE4, 0xC9)),
            ("Gold", Rgb::new(0xFF, 0xD7, 0x00)),
            ("GoldenBlonde", Rgb::new(0xFB, 0xE7, 0xA1)),
            ("GoldenBrown", Rgb::new(0xEA, 0xC1, 0x17)),
            ("GoldenSilk", Rgb::new(0xF3, 0xE3, 0xC3)),
            ("GoldenYellow", Rgb::new(0xFF, 0xDF, 0x00)),
            ("HarvestGold", Rgb::new(0xED, 0xE2, 0x75)),
            ("Khaki", Rgb::new(0xF0, 0xE6, 0x8C)),
            ("LemonChiffon", Rgb::new(0xFF, 0xFA, 0xCD)),
            ("LemonYellow", Rgb::new(0xFE, 0xF2, 0x50)),
            ("LightBeige", Rgb::new(0xFF, 0xF0, 0xDB)),
            ("LightGold", Rgb::new(0xF1, 0xE5, 0xAC)),
            ("LightGoldenrodYellow", Rgb::new(0xFA, 0xFA, 0xD2)),
            ("LightOrange", Rgb::new(0xFE, 0xD8, 0xB1)),
            ("LightYellow", Rgb::new(0xFF, 0xFF, 0xE0)),
            ("MacaroniAndCheese", Rgb::new(0xF2, 0xBB, 0x66)),
            ("Moccasin", Rgb::new(0xFF, 0xE4, 0xB5)),
            ("MustardYellow", Rgb::new(0xFF, 0xDB, 0x58)),
            ("NeonGold", Rgb::new(0xFD, 0xBD, 0x01)),
            ("NeonYellow", Rgb::new(0xFF, 0xFF, 0x33)),
            ("PaleGoldenrod", Rgb::new(0xEE, 0xE8, 0xAA)),
            ("PapayaWhip", Rgb::new(0xFF, 0xEF, 0xD5)),
            ("Parchment", Rgb::new(0xFF, 0xFF, 0xC2)),
            ("PastelYellow", Rgb::new(0xFA, 0xF8, 0x84)),
            ("Peach", Rgb::new(0xFF, 0xE5, 0xB4)),
            ("PeachPuff", Rgb::new(0xFF, 0xDA, 0xB9)),
            ("RubberDuckyYellow", Rgb::new(0xFF, 0xD8, 0x01)),
            ("SafetyYellow", Rgb::new(0xEE, 0xD2, 0x02)),
            ("Saffron", Rgb::new(0xFB, 0xB9, 0x17)),
            ("SunYellow", Rgb::new(0xFF, 0xE8, 0x7C)),
            ("TanBrown", Rgb::new(0xEC, 0xE5, 0xB6)),
            ("Vanilla", Rgb::new(0xF3, 0xE5, 0xAB)),
            ("WhiteYellow", Rgb::new(0xF2, 0xF0, 0xDF)),
            ("Yellow", Rgb::new(0xFF, 0xFF, 0x00)),
            ("YellowOrange", Rgb::new(0xFF, 0xAE, 0x42)),
        ],
    ),
    (
        "Greens",
        &[
            ("AcidGreen", Rgb::new(0xB0, 0xBF, 0x1A)),
            ("AlgaeGreen", Rgb::new(0x64, 0xE9, 0x86)),
            ("AlienGreen", Rgb::new(0x6C, 0xC4, 0x17)),
            ("AloeVeraGreen", Rgb::new(0x98, 0xF5, 0x16)),
            ("AquaGreen", Rgb::new(0x12, 0xE1, 0x93)),
            ("ArmyGreen", Rgb::new(0x4B, 0x53, 0x20)),
            ("AvocadoGreen", Rgb::new(0xB2, 0xC2, 0x48)),
            ("BasilGreen", Rgb::new(0x82, 0x9F, 0x82)),
            ("BrightGreen", Rgb::new(0x66, 0xFF, 0x00)),
            ("BroccoliGreen", Rgb::new(0x02, 0x6C, 0x3D)),
            ("CactusGreen", Rgb::new(0x22, 0x74, 0x42)),
            ("CamouflageGreen", Rgb::new(0x78, 0x86, 0x6B)),
            ("ChameleonGreen", Rgb::new(0xBD, 0xF5, 0x16)),
            ("Chartreuse", Rgb::new(0x7F, 0xFF, 0x00)),
            ("ChromeWhite", Rgb::new(0xE8, 0xF1, 0xD4)),
            ("CitronGreen", Rgb::new(0x8F, 0xB3, 0x1D)),
            ("CloverGreen", Rgb::new(0x3E, 0xA0, 0x55)),
            ("DarkCyan", Rgb::new(0x00, 0x8B, 0x8B)),
            ("DarkForestGreen", Rgb::new(0x25, 0x41, 0x17)),
            ("DarkGreen", Rgb::new(0x00, 0x64, 0x00)),
            ("DarkLimeGreen", Rgb::new(0x41, 0xA3, 0x17)),
            ("DarkOliveGreen", Rgb::new(0x55, 0x6B, 0x2F)),
            ("DarkSeaGreen", Rgb::new(0x8F, 0xBC, 0x8F)),
            ("DeepEmeraldGreen", Rgb::new(0x04, 0x63, 0x07)),
            ("DeepGreen", Rgb::new(0x05, 0x66, 0x08)),
            ("DinosaurGreen", Rgb::new(0x73, 0xA1, 0x6C)),
            ("DollarBillGreen", Rgb::new(0x85, 0xBB, 0x65)),
            ("DragonGreen", Rgb::new(0x6A, 0xFB, 0x92)),
            ("DullGreenYellow", Rgb::new(0xB1, 0xFB, 0x17)),
            ("Ebony", Rgb::new(0x55, 0x5D, 0x50)),
            ("EmeraldGreen", Rgb::new(0x5F, 0xFB, 0x17)),
            ("FallForestGreen", Rgb::new(0x4E, 0x92, 0x58)),
            ("FernGreen", Rgb::new(0x66, 0x7C, 0x26)),
            ("ForestGreen", Rgb::new(0x22, 0x8B, 0x22)),
            ("FrogGreen", Rgb::new(0x99, 0xC6, 0x8E)),
            ("GrassGreen", Rgb::new(0x3F, 0x9B, 0x0B)),
            ("GrayGreen", Rgb::new(0xA2, 0xAD, 0x9C)),
            ("Green", Rgb::new(0x00, 0x80, 0x00)),
            ("GreenApple", Rgb::new(0x4C, 0xC4, 0x17)),
            ("GreenLeaves", Rgb::new(0x3A, 0x5F, 0x0B)),
            ("GreenOnion", Rgb::new(0x6A, 0xA1, 0x21)),
            ("GreenPeas", Rgb::new(0x89, 0xC3, 0x5C)),
            ("GreenPepper", Rgb::new(0x4A, 0xA0, 0x2C)),
            ("GreenSnake", Rgb::new(0x6C, 0xBB, 0x3C)),
            ("GreenThumb", Rgb::new(0xB5, 0xEA, 0xAA)),
            ("GreenYellow", Rgb::new(0xAD, 0xFF, 0x2F)),
            ("HazelGreen", Rgb::new(0x61, 0x7C, 0x58)),
            ("HummingbirdGreen", Rgb::new(0x7F, 0xE8, 0x17)),
            ("HunterGreen", Rgb::new(0x35, 0x5E, 0x3B)),
            ("IguanaGreen", Rgb::new(0x9C, 0xB0, 0x71)),
            ("IrishGreen", Rgb::new(0x08, 0xA0, 0x4B)),
            ("JadeGreen", Rgb::new(0x5E, 0xFB, 0x6E)),
            ("JungleGreen", Rgb::new(0x34, 0x7C, 0x2C)),
            ("KellyGreen", Rgb::new(0x4C, 0xC5, 0x52)),
            ("LawnGreen", Rgb::new(0x7C, 0xFC, 0x00)),
            ("LemonGreen", Rgb::new(0xAD, 0xF8, 0x02)),
            ("LightGreen", Rgb::new(0x90, 0xEE, 0x90)),
            ("LightJade", Rgb::new(0xC3, 0xFD, 0xB8)),
            ("LightMintGreen", Rgb::new(0xC2, 0xE5, 0xD3)),
            ("LightOliveGreen", Rgb::new(0xB8, 0xBC, 0x86)),
            ("LightRoseGreen", Rgb::new(0xDB, 0xF9, 0xDB)),
            ("LightSeaGreen", Rgb::new(0x20, 0xB2, 0xAA)),
            ("Lime", Rgb::new(0x00, 0xFF, 0x00)),
            ("LimeGreen", Rgb::new(0x32, 0xCD, 0x32)),
            ("LimeMintGreen", Rgb::new(0x36, 0xF5, 0x7F)),
            ("LotusGreen", Rgb::new(0x00, 0x42, 0x25)),
            ("MediumAquamarine", Rgb::new(0x66, 0xCD, 0xAA)),
            ("MediumForestGreen", Rgb::new(0x34, 0x72, 0x35)),
            ("MediumSeaGreen", Rgb::new(0x3C, 0xB3, 0x71)),
            ("MediumSpringGreen", Rgb::new(0x00, 0xFA, 0x9A)),
            ("MetallicGreen", Rgb::new(0x7C, 0x9D, 0x8E)),
            ("MilitaryGreen", Rgb::new(0x4E, 0x5B, 0x31)),
            ("MintGreen", Rgb::new(0x98, 0xFF, 0x98)),
            ("MossGreen", Rgb::new(0x8A, 0x9A, 0x5B)),
            ("NebulaGreen", Rgb::new(0x59, 0xE8, 0x17)),
            ("NeonGreen", Rgb::new(0x16, 0xF5, 0x29)),
            ("NeonYellowGreen", Rgb::new(0xDA, 0xEE, 0x01)),
            ("OceanGreen", Rgb::new(0x00, 0xFF, 0x80)),
            ("Olive", Rgb::new(0x80, 0x80, 0x00)),
            ("OliveDrab", Rgb::new(0x6B, 0x8E, 0x23)),
            ("OrganicBrown", Rgb::new(0xE3, 0xF9, 0xA6)),
            ("PaleGreen", Rgb::new(0x98, 0xFB, 0x98)),
            ("ParrotGreen", Rgb::new(0x12, 0xAD, 0x2B)),
            ("PastelGreen", Rgb::new(0x77, 0xDD, 0x77)),
            ("PeaGreen", Rgb::new(0x52, 0xD0, 0x17)),
            ("PineGreen", Rgb::new(0x38, 0x7C, 0x44)),
            ("PistachioGreen", Rgb::new(0x9D, 0xC2, 0x09)),
            ("RacingGreen", Rgb::new(0x27, 0x74, 0x2C)),
            ("SageGreen", Rgb::new(0x84, 0x8B, 0x79)),
            ("SaladGreen", Rgb::new(0xA1, 0xC9, 0x35)),
            ("SeaGreen", Rgb::new(0x2E, 0x8B, 0x57)),
            ("SeaweedGreen", Rgb::new(0x43, 0x7C, 0x17)),
            ("ShamrockGreen", Rgb::new(0x34, 0x7C, 0x17)),
            ("SlimeGreen", Rgb::new(0xBC, 0xE9, 0x54)),
            ("SpringGreen", Rgb::new(0x00, 0xFF, 0x7F)),
            ("StoplightGoGreen", Rgb::new(0x57, 0xE9, 0x64)),
            ("Teal", Rgb::new(0x00, 0x80, 0x80)),
            ("TeaGreen", Rgb::new(0xCC, 0xFB, 0x5D)),
            ("TurquoiseGreen", Rgb::new(0xA0, 0xD6, 0xB4)),
            ("VenomGreen", Rgb::new(0x72, 0x8C, 0x00)),
            ("YellowGreen", Rgb::new(0x9A, 0xCD, 0x32)),
            ("YellowGreenGrosbeak", Rgb::new(0xE2, 0xF5, 0x16)),
            ("YellowLawnGreen", Rgb::new(0x87, 0xF7, 0x17)),
            ("ZombieGreen", Rgb::new(0x54, 0xC5, 0x71)),
        ],
    ),
    (
        "Blues",
        &[
            ("Aqua", Rgb::new(0x00, 0xFF, 0xFF)),
            ("Aquamarine", Rgb::new(0x7F, 0xFF, 0xD4)),
            ("AquamarineStone", Rgb::new(0x34, 0x87, 0x81)),
            ("AquaSeafoamGreen", Rgb::new(0x93, 0xE9, 0xBE)),
            ("AzureBlue", Rgb::new(0x48, 0x63, 0xA0)),
            ("BabyBlue", Rgb::new(0x95, 0xB9, 0xC7)),
            ("BalloonBlue", Rgb::new(0x2B, 0x60, 0xDE)),
            ("BeetleGreen", Rgb::new(0x4C, 0x78, 0x7E)),
            ("Blue", Rgb::new(0x00, 0x00, 0xFF)),
            ("BlueAngel", Rgb::new(0xB7, 0xCE, 0xEC)),
            ("BlueberryBlue", Rgb::new(0x00, 0x41, 0xC2)),
            ("BlueDiamond", Rgb::new(0x4E, 0xE2, 0xEC)),
            ("BlueDress", Rgb::new(0x15, 0x7D, 0xEC)),
            ("BlueEyes", Rgb::new(0x15, 0x69, 0xC7)),
            ("BlueGreen", Rgb::new(0x7B, 0xCC, 0xB5)),
            ("BlueHosta", Rgb::new(0x77, 0xBF, 0xC7)),
            ("BlueIvy", Rgb::new(0x30, 0x90, 0xC7)),
            ("BlueJay", Rgb::new(0x2B, 0x54, 0x7E)),
            ("BlueKoi", Rgb::new(0x65, 0x9E, 0xC7)),
            ("BlueLagoon", Rgb::new(0x8E, 0xEB, 0xEC)),
            ("BlueMossGreen", Rgb::new(0x3C, 0x56, 0x5B)),
            ("BlueOrchid", Rgb::new(0x1F, 0x45, 0xFC)),
            ("BlueRibbon", Rgb::new(0x30, 0x6E, 0xFF)),
            ("BlueTurquoise", Rgb::new(0x43, 0xC6, 0xDB)),
            ("BlueZircon", Rgb::new(0x57, 0xFE, 0xFF)),
            ("BottleGreen", Rgb::new(0x00, 0x6A, 0x4E)),
            ("BrightBlue", Rgb::new(0x09, 0x09, 0xFF)),
            ("BrightCyan", Rgb::new(0x0A, 0xFF, 0xFF)),
            ("BrightNavyBlue", Rgb::new(0x19, 0x74, 0xD2)),
            ("BrightTeal", Rgb::new(0x01, 0xF9, 0xC6)),
            ("BrightTurquoise", Rgb::new(0x16, 0xE2, 0xF5)),
            ("ButterflyBlue", Rgb::new(0x38, 0xAC, 0xEC)),
            ("CadetBlue", Rgb::new(0x5F, 0x9E, 0xA0)),
            ("CanaryBlue", Rgb::new(0x29, 0x16, 0xF5)),
            ("Celeste", Rgb::new(0x50, 0xEB, 0xEC)),
            ("CharcoalBlue", Rgb::new(0x36, 0x45, 0x4F)),
            ("ChromeGreen", Rgb::new(0x1A, 0xA2, 0x60)),
            ("CobaltBlue", Rgb::new(0x00, 0x20, 0xC2)),
            ("ColumbiaBlue", Rgb::new(0x87, 0xAF, 0xC7)),
            ("CoralBlue", Rgb::new(0xAF, 0xDC, 0xEC)),
            ("CornflowerBlue", Rgb::new(0x64, 0x95, 0xED)),
            ("CrystalBlue", Rgb::new(0x5C, 0xB3, 0xFF)),
            ("Cyan", Rgb::new(0x00, 0xFF, 0xFF)),
            ("CyanBlue", Rgb::new(0x14, 0xA3, 0xC7)),
            ("CyanOpaque", Rgb::new(0x92, 0xC7, 0xC7)),
            ("DarkBlue", Rgb::new(0x00, 0x00, 0x8B)),
            ("DarkBlueGray", Rgb::new(0x29, 0x46, 0x5B)),
            ("DarkGreenBlue", Rgb::new(0x1F, 0x63, 0x57)),
            ("DarkMint", Rgb::new(0x31, 0x90, 0x6E)),
            ("DarkSkyBlue", Rgb::new(0x00, 0x59, 0xFF)),
            ("DarkSlate", Rgb::new(0x2B, 0x38, 0x56)),
            ("DarkTeal", Rgb::new(0x04, 0x5D, 0x5D)),
            ("DarkTurquoise", Rgb::new(0x00, 0xCE, 0xD1)),
            ("DaySkyBlue", Rgb::new(0x82, 0xCA, 0xFF)),
            ("DeepSea", Rgb::new(0x3B, 0x9C, 0x9C)),
            ("DeepSeaGreen", Rgb::new(0x30, 0x67, 0x54)),
            ("DeepSkyBlue", Rgb::new(0x00, 0xBF, 0xFF)),
            ("DeepTeal", Rgb::new(0x03, 0x3E, 0x3E)),
            ("DeepTurquoise", Rgb::new(0x48, 0xCC, 0xCD)),
            ("DenimBlue", Rgb::new(0x79, 0xBA, 0xEC)),
            ("DenimDarkBlue", Rgb::new(0x15, 0x1B, 0x8D)),
            ("DodgerBlue", Rgb::new(0x1E, 0x90, 0xFF)),
            ("DullSeaGreen", Rgb::new(0x4E, 0x89, 0x75)),
            ("EarthBlue", Rgb::new(0x00, 0x00, 0xA5)),
            ("EarthGreen", Rgb::new(0x34, 0xA5, 0x6F)),
            ("ElectricBlue", Rgb::new(0x9A, 0xFE, 0xFF)),
            ("ElfGreen", Rgb::new(0x1B, 0x8A, 0x6B)),
            ("Emerald", Rgb::new(0x50, 0xC8, 0x78)),
            ("EstorilBlue", Rgb::new(0x2F, 0x53, 0x9B)),
            ("GlacialBlueIce", Rgb::new(0x36, 0x8B, 0xC1)),
            ("GrayishTurquoise", Rgb::new(0x5E, 0x7D, 0x7E)),
            ("GreenishBlue", Rgb::new(0x30, 0x7D, 0x7E)),
            ("GulfBlue", Rgb::new(0xC9, 0xDF, 0xEC)),
            ("Gunmetal", Rgb::new(0x2C, 0x35, 0x39)),
            ("HeavenlyBlue", Rgb::new(0xC6, 0xDE, 0xFF)),
            ("Iceberg", Rgb::new(0x56, 0xA5, 0xEC)),
            ("IsleOfManGreen", Rgb::new(0x22, 0xCE, 0x83)),
            ("Jade", Rgb::new(0x00, 0xA3, 0x6C)),
            ("JeansBlue", Rgb::new(0xA0, 0xCF, 0xEC)),
            ("Jellyfish", Rgb::new(0x46, 0xC7, 0xC7)),
            ("LapisBlue", Rgb::new(0x15, 0x31, 0x7E)),
            ("LavenderBlue", Rgb::new(0xE3, 0xE4, 0xFA)),
            ("LightAquamarine", Rgb::new(0x93, 0xFF, 0xE8)),
            ("LightBlue", Rgb::new(0xAD, 0xD8, 0xE6)),
            ("LightCyan", Rgb::new(0xE0, 0xFF, 0xFF)),
            ("LightDayBlue", Rgb::new(0xAD, 0xDF, 0xFF)),
            ("LightPurpleBlue", Rgb::new(0x72, 0x8F, 0xCE)),
            ("LightSkyBlue", Rgb::new(0x87, 0xCE, 0xFA)),
            ("LightSlate", Rgb::new(0xCC, 0xFF, 0xFF)),
            ("LightSteelBlue", Rgb::new(0xB0, 0xC4, 0xDE)),
            ("LightTeal", Rgb::new(0xB3, 0xD9, 0xD9)),
            ("MacawBlueGreen", Rgb::new(0x43, 0xBF, 0xC7)),
            ("MagicMint", Rgb::new(0xAA, 0xF0, 0xD1)),
            ("MarbleBlue", Rgb::new(0x56, 0x6D, 0x7E)),
            ("MediumBlue", Rgb::new(0x00, 0x00, 0xCD)),
            ("MediumSlateBlue", Rgb::new(0x7B, 0x68, 0xEE)),
            ("MediumTeal", Rgb::new(0x04, 0x5F, 0x5F)),
            ("MediumTurquoise", Rgb::new(0x48, 0xD1, 0xCC)),
            ("MidnightBlue", Rgb::new(0x19, 0x19, 0x70)),
            ("MiddayBlue", Rgb::new(0x3B, 0xB9, 0xFF)),
            ("Mint", Rgb::new(0x3E, 0xB4, 0x89)),
            ("MistBlue", Rgb::new(0x64, 0x6D, 0x7E)),
            ("Navy", Rgb::new(0x00, 0x00, 0x80)),
            ("NeonBlue", Rgb::new(0x15, 0x89, 0xFF)),
            ("NewMidnightBlue", Rgb::new(0x00, 0x00, 0xA0)),
            ("NorthernLightsBlue", Rgb::new(0x78, 0xC7, 0xC7)),
            ("OceanBlue", Rgb::new(0x2B, 0x65, 0xEC)),
            ("PaleBlueLily", Rgb::new(0xCF, 0xEC, 0xEC)),
            ("PaleTurquoise", Rgb::new(0xAF, 0xEE, 0xEE)),
            ("PastelBlue", Rgb::new(0xB4, 0xCF, 0xEC)),
            ("PastelLightBlue", Rgb::new(0xD5, 0xD6, 0xEA)),
            ("PowderBlue", Rgb::new(0xB0, 0xE0, 0xE6)),
            ("RatGray", Rgb::new(0x6D, 0x7B, 0x8D)),
            ("RobinEggBlue", Rgb::new(0xBD, 0xED, 0xFF)),
            ("RoyalBlue", Rgb::new(0x41, 0x69, 0xE1)),
            ("SamcoBlue", Rgb::new(0x00, 0x02, 0xFF)),
            ("SapphireBlue", Rgb::new(0x25, 0x54, 0xC7)),
            ("SeaBlue", Rgb::new(0xC2, 0xDF, 0xFF)),
            ("SeafoamGreen", Rgb::new(0x3E, 0xA9, 0x9F)),
            ("SeaTurtleGreen", Rgb::new(0x43, 0x8D, 0x80)),
            ("SilkBlue", Rgb::new(0x48, 0x8A, 0xC7)),
            ("SkyBlue", Rgb::new(0x87, 0xCE, 0xEB)),
            ("SkyBlueDress", Rgb::new(0x66, 0x98, 0xFF)),
            ("SlateBlueGray", Rgb::new(0x73, 0x7C, 0xA1)),
            ("SteelBlue", Rgb::new(0x46, 0x82, 0xB4)),
            ("SteelGray", Rgb::new(0x71, 0x79, 0x7E)),
            ("TealBlue", Rgb::new(0x00, 0x7C, 0x80)),
            ("TealGreen", Rgb::new(0x00, 0x82, 0x7F)),
            ("TiffanyBlue", Rgb::new(0x81, 0xD8, 0xD0)),
            ("TronBlue", Rgb::new(0x7D, 0xFD, 0xFE)),
            ("Turquoise", Rgb::new(0x40, 0xE0, 0xD0)),
            ("Water", Rgb::new(0xEB, 0xF4, 0xFA)),
            ("WaterBlue", Rgb::new(0x0E, 0x87, 0xCC)),
            ("WhiteBlue", Rgb::new(0xDB, 0xE9, 0xFA)),
            ("WindowsBlue", Rgb::new(0x35, 0x7E, 0xC7)),
        ],
    ),
    (
        "Purples",
        &[
            ("Amethyst", Rgb::new(0x99, 0x66, 0xCC)),
            ("BlueViolet", Rgb::new(0x8A, 0x2B, 0xE2)),
            ("DarkMagenta", Rgb::new(0x8B, 0x00, 0x8B)),
            ("DarkOrchid", Rgb::new(0x99, 0x32, 0xCC)),
            ("DarkSlateBlue", Rgb::new(0x48, 0x3D, 0x8B)),
            ("DarkViolet", Rgb::new(0x94, 0x00, 0xD3)),
            ("Fuchsia", Rgb::new(0xFF, 0x00, 0xFF)),
            ("Grape", Rgb::new(0x5E, 0x5A, 0x80)),
            ("Indigo", Rgb::new(0x4B, 0x00, 0x82)),
            ("Lavender", Rgb::new(0xE6, 0xE6, 0xFA)),
            ("Magenta", Rgb::new(0xFF, 0x00, 0xFF)),
            ("MediumOrchid", Rgb::new(0xBA, 0x55, 0xD3)),
            ("MediumPurple", Rgb::new(0x93, 0x70, 0xDB)),
            ("Orchid", Rgb::new(0xDA, 0x70, 0xD6)),
            ("Plum", Rgb::new(0xDD, 0xA0, 0xDD)),
            ("Purple", Rgb::new(0x80, 0x00, 0x80)),
            ("PurpleNavy", Rgb::new(0x4E, 0x51, 0x80)),
            ("PurpleWhite", Rgb::new(0xDF, 0xD3, 0xE3)),
            ("RebeccaPurple", Rgb::new(0x66, 0x33, 0x99)),
            ("SlateBlue", Rgb::new(0x6A, 0x5A, 0xCD)),
            ("Thistle", Rgb::new(0xD8, 0xBF, 0xD8)),
            ("Violet", Rgb::new(0xEE, 0x82, 0xEE)),
        ],
    ),
    (
        "Browns",
        &[
            ("AntiqueBronze", Rgb::new(0x66, 0x5D, 0x1E)),
            ("ArmyBrown", Rgb::new(0x82, 0x7B, 0x60)),
            ("BakersBrown", Rgb::new(0x5C, 0x33, 0x17)),
            ("BeeYellow", Rgb::new(0xE9, 0xAB, 0x17)),
            ("Bisque", Rgb::new(0xFF, 0xE4, 0xC4)),
            ("BlanchedAlmond", Rgb::new(0xFF, 0xEB, 0xCD)),
            ("Bronze", Rgb::new(0xCD, 0x7F, 0x32)),
            ("Brown", Rgb::new(0xA5, 0x2A, 0x2A)),
            ("BrownBear", Rgb::new(0x83, 0x5C, 0x3B)),
            ("BulletShell", Rgb::new(0xAF, 0x9B, 0x60)),
            ("BurlyWood", Rgb::new(0xDE, 0xB8, 0x87)),
            ("Caramel", Rgb::new(0xC6, 0x8E, 0x17)),
            ("ChampagneGold", Rgb::new(0xD2, 0x9F, 0x51)),
            ("Chocolate", Rgb::new(0xD2, 0x69, 0x1E)),
            ("Cinnamon", Rgb::new(0xC5, 0x89, 0x17)),
            ("Coffee", Rgb::new(0x6F, 0x4E, 0x37)),
            ("CookieBrown", Rgb::new(0xC7, 0xA3, 0x17)),
            ("Cooper", Rgb::new(0xB8, 0x73, 0x33)),
            ("Cornsilk", Rgb::new(0xFF, 0xF8, 0xDC)),
            ("DarkAlmond", Rgb::new(0xAB, 0x78, 0x4E)),
            ("DarkBeige", Rgb::new(0x9F, 0x8C, 0x76)),
            ("DarkBronze", Rgb::new(0x80, 0x4A, 0x00)),
            ("DarkBrown", Rgb::new(0x65, 0x43, 0x21)),
            ("DarkCoffee", Rgb::new(0x3B, 0x2F, 0x2F)),
            ("DarkGoldenrod", Rgb::new(0xB8, 0x86, 0x0B)),
            ("DarkGrayishOlive", Rgb::new(0x4A, 0x41, 0x2A)),
            ("DarkHazelBrown", Rgb::new(0x47, 0x38, 0x10)),
            ("DarkMoccasin", Rgb::new(0x82, 0x78, 0x39)),
            ("DarkSienna", Rgb::new(0x8A, 0x41, 0x17)),
            ("DarkYellow", Rgb::new(0x8B, 0x80, 0x00)),
            ("Goldenrod", Rgb::new(0xDA, 0xA5, 0x20)),
            ("GrayBrown", Rgb::new(0x3D, 0x36, 0x35)),
            ("Hazel", Rgb::new(0x8E, 0x76, 0x18)),
            ("KhakiBrown", Rgb::new(0x90, 0x6E, 0x3E)),
            ("KhakiGreen", Rgb::new(0x8A, 0x86, 0x5D)),
            ("Marigold", Rgb::new(0xEB, 0xA8, 0x32)),
            ("Maroon", Rgb::new(0x80, 0x00, 0x00)),
            ("MetallicGold", Rgb::new(0xD4, 0xAF, 0x37)),
            ("MilkChocolate", Rgb::new(0x51, 0x3B, 0x1C)),
            ("MillenniumJade", Rgb::new(0x93, 0x91, 0x7C)),
            ("Mocha", Rgb::new(0x49, 0x3D, 0x26)),
            ("Mustard", Rgb::new(0xE1, 0xAD, 0x01)),
            ("NavajoWhite", Rgb::new(0xFF, 0xDE, 0xAD)),
            ("OakBrown", Rgb::new(0x80, 0x65, 0x17)),
            ("OldBurgundy", Rgb::new(0x43, 0x30, 0x2E)),
            ("OrangeGold", Rgb::new(0xD4, 0xA0, 0x17)),
            ("Peru", Rgb::new(0xCD, 0x85, 0x3F)),
            ("PullmanBrown", Rgb::new(0x64, 0x41, 0x17)),
            ("PumpkinPie", Rgb::new(0xCA, 0x76, 0x2B)),
            ("RedBrown", Rgb::new(0x62, 0x2F, 0x22)),
            ("RedDirt", Rgb::new(0x7F, 0x52, 0x17)),
            ("RosyBrown", Rgb::new(0xBC, 0x8F, 0x8F)),
            ("SaddleBrown", Rgb::new(0x8B, 0x45, 0x13)),
            ("SandyBrown", Rgb::new(0xF4, 0xA4, 0x60)),
            ("SchoolBusYellow", Rgb::new(0xE8, 0xA3, 0x17)),
            ("Sepia", Rgb::new(0x7F, 0x46, 0x2C)),
            ("SepiaBrown", Rgb::new(0x70, 0x42, 0x14)),
            ("Sienna", Rgb::new(0xA0, 0x52, 0x2D)),
            ("Sandstone", Rgb::new(0x78, 0x6D, 0x5F)),
            ("Tan", Rgb::new(0xD2, 0xB4, 0x8C)),
            ("Taupe", Rgb::new(0x48, 0x3C, 0x32)),
            ("TigerOrange", Rgb::new(0xC8, 0x81, 0x41)),
            ("WesternCharcoal", Rgb::new(0x49, 0x41, 0x3F)),
            ("Wheat", Rgb::new(0xF5, 0xDE, 0xB3)),
            ("Wood", Rgb::new(0x96, 0x6F, 0x33)),
        ],
    ),
    (
        "Whites",
        &[
            ("AliceBlue", Rgb::new(0xF0, 0xF8, 0xFF)),
            ("AntiqueWhite", Rgb::new(0xFA, 0xEB, 0xD7)),
            ("Azure", Rgb::new(0xF0, 0xFF, 0xFF)),
            ("Beige", Rgb::new(0xF5, 0xF5, 0xDC)),
            ("FloralWhite", Rgb::new(0xFF, 0xFA, 0xF0)),
            ("GhostWhite", Rgb::new(0xF8, 0xF8, 0xFF)),
            ("HoneyDew", Rgb::new(0xF0, 0xFF, 0xF0)),
            ("Ivory", Rgb::new(0xFF, 0xFF, 0xF0)),
            ("LavenderBlush", Rgb::new(0xFF, 0xF0, 0xF5)),
            ("Linen", Rgb::new(0xFA, 0xF0, 0xE6)),
            ("MintCream", Rgb::new(0xF5, 0xFF, 0xFA)),
            ("OldLace", Rgb::new(0xFD, 0xF5, 0xE6)),
            ("PearlWhite", Rgb::new(0xF8, 0xF6, 0xF0)),
            ("Platinum", Rgb::new(0xE5, 0xE4, 0xE2)),
            ("RedWhite", Rgb::new(0xF3, 0xE8, 0xEA)),
            ("SeaShell", Rgb::new(0xFF, 0xF5, 0xEE)),
            ("Snow", Rgb::new(0xFF, 0xFA, 0xFA)),
            ("White", Rgb::new(0xFF, 0xFF, 0xFF)),
            ("WhiteSmoke", Rgb::new(0xF5, 0xF5, 0xF5)),
        ],
    ),
    (
        "Grays",
        &[
            ("AlienGray", Rgb::new(0x73, 0x6F, 0x6E)),
            ("AshGray", Rgb::new(0x66, 0x63, 0x62)),
            ("BattleshipGray", Rgb::new(0x84, 0x84, 0x82)),
            ("Black", Rgb::new(0x00, 0x00, 0x00)),
            ("BlackCat", Rgb::new(0x41, 0x38, 0x39)),
            ("BlackCow", Rgb::new(0x4C, 0x46, 0x46)),
            ("CarbonGray", Rgb::new(0x62, 0x5D, 0x5D)),
            ("Charcoal", Rgb::new(0x34, 0x28, 0x2C)),
            ("ChromeAluminum", Rgb::new(0xA8, 0xA9, 0xAD)),
            ("CloudyGray", Rgb::new(0x6D, 0x69, 0x68)),
            ("ColdMetal", Rgb::new(0x9B, 0x9A, 0x96)),
            ("DarkGainsboro", Rgb::new(0x8C, 0x8C, 0x8C)),
            ("DarkGray", Rgb::new(0xA9, 0xA9, 0xA9)),
            ("DarkSlateGray", Rgb::new(0x2F, 0x4F, 0x4F)),
            ("DimGray", Rgb::new(0x69, 0x69, 0x69)),
            ("Gainsboro", Rgb::new(0xDC, 0xDC, 0xDC)),
            ("GearSteelGray", Rgb::new(0xC0, 0xC6, 0xC7)),
            ("Granite", Rgb::new(0x83, 0x7E, 0x7C)),
            ("Gray", Rgb::new(0x80, 0x80, 0x80)),
            ("GrayCloud", Rgb::new(0xB6, 0xB6, 0xB4)),
            ("GrayDolphin", Rgb::new(0x5C, 0x58, 0x58)),
            ("GrayGoose", Rgb::new(0xD1, 0xD0, 0xCE)),
            ("GrayWolf", Rgb::new(0x50, 0x4A, 0x4B)),
            ("GunmetalGray", Rgb::new(0x8D, 0x91, 0x8D)),
            ("Iridium", Rgb::new(0x3D, 0x3C, 0x3A)),
            ("IronGray", Rgb::new(0x52, 0x59, 0x5D)),
            ("LightBlack", Rgb::new(0x45, 0x45, 0x45)),
            ("LightGray", Rgb::new(0xD3, 0xD3, 0xD3)),
            ("LightSlateGray", Rgb::new(0x77, 0x88, 0x99)),
            ("LightSteelGray", Rgb::new(0xE0, 0xE5, 0xE5)),
            ("Metal", Rgb::new(0xB6, 0xB6, 0xB6)),
            ("NardoGray", Rgb::new(0x68, 0x6A, 0x6C)),
            ("Night", Rgb::new(0x0C, 0x09, 0x0A)),
            ("PaleSilver", Rgb::new(0xC9, 0xC0, 0xBB)),
            ("PlatinumGray", Rgb::new(0x79, 0x79, 0x79)),
            ("PlatinumSilver", Rgb::new(0xCE, 0xCE, 0xCE)),
            ("SheetMetal", Rgb::new(0x88, 0x8B, 0x90)),
            ("Silver", Rgb::new(0xC0, 0xC0, 0xC0)),
            ("SilverWhite", Rgb::new(0xDA, 0xDB, 0xDD)),
            ("SlateGray", Rgb::new(0x70, 0x80, 0x90)),
            ("SmokeyGray", Rgb::new(0x72, 0x6E, 0x6D)),
            ("SonicSilver", Rgb::new(0x75, 0x75, 0x75)),
            ("StainlessSteelGray", Rgb::new(0x99, 0xA3, 0xA3)),
            ("Steampunk", Rgb::new(0xC9, 0xC1, 0xC1)),
            ("VampireGray", Rgb::new(0x56, 0x50, 0x51)),
            ("WhiteGray", Rgb::new(0xEE, 0xEE, 0xEE)),
        ],
    ),
];
