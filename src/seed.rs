//! Demo catalog used by the `seed` command and `[seed] seed_demo_data`.

use anyhow::{Context, Result};
use sea_orm::{ActiveValue::Set, EntityTrait, TransactionTrait};
use tracing::info;

use crate::db::{Store, now_timestamp};
use crate::entities::{
    artisans, badges, brands, care_instructions, cultural_content, garments, impact_metrics,
    stamps, tag_codes, user_badges, users,
};
use crate::models::catalog::SupplyChainStep;
use crate::models::encode_list;

pub const DEMO_USER_ID: &str = "user-1";

/// Outcome of a seed run. The demo API key is only known when the data was
/// written by this run.
#[derive(Debug, Clone)]
pub struct SeedSummary {
    pub seeded: bool,
    pub demo_api_key: Option<String>,
}

struct BrandSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    origin: &'static str,
    philosophy: &'static str,
    practices: &'static [&'static str],
    logo_url: &'static str,
    website: &'static str,
}

const BRANDS: &[BrandSeed] = &[
    BrandSeed {
        id: "brand-1",
        name: "Threads of Heritage",
        description: "Preserving Guatemalan textile traditions through ethical partnerships with indigenous artisans",
        origin: "Guatemala",
        philosophy: "We believe in honoring traditional craftsmanship while providing fair wages and sustainable livelihoods",
        practices: &[
            "Fair Trade Certified",
            "Natural Dyes Only",
            "Zero Waste Production",
            "Artisan Profit Sharing",
        ],
        logo_url: "https://images.unsplash.com/photo-1560343090-f0409e92791a?w=400",
        website: "https://threadsofheritage.com",
    },
    BrandSeed {
        id: "brand-2",
        name: "Desert Rose Collective",
        description: "Connecting global citizens with artisans across Morocco, Japan, and India",
        origin: "Morocco",
        philosophy: "Celebrating cultural diversity through mindful fashion and cross-cultural collaboration",
        practices: &[
            "Organic Materials",
            "Water Conservation",
            "Community Development",
            "Cultural Preservation",
        ],
        logo_url: "https://images.unsplash.com/photo-1544441893-675973e31985?w=400",
        website: "https://desertrosecollective.com",
    },
    BrandSeed {
        id: "brand-3",
        name: "Pajama Sutra",
        description: "Celebrating India's rich textile heritage through handloom cotton and natural dyeing traditions from Jaipur",
        origin: "India",
        philosophy: "Honoring the rhythms of slow fashion, where each garment is woven, dyed, and block-printed by hand",
        practices: &[
            "100% Handloom Cotton",
            "Natural Plant Dyes",
            "Zero Synthetic Chemicals",
            "Artisan Livelihoods",
            "78% Lower Carbon Emissions",
        ],
        logo_url: "https://images.unsplash.com/photo-1583847268964-b28dc8f51f92?w=400",
        website: "https://pajamasutra.com",
    },
];

struct ArtisanSeed {
    id: &'static str,
    name: &'static str,
    country: &'static str,
    region: &'static str,
    craft: &'static str,
    bio: &'static str,
    photo_url: &'static str,
    years: i32,
}

const ARTISANS: &[ArtisanSeed] = &[
    ArtisanSeed {
        id: "artisan-1",
        name: "María Elena Tuyuc",
        country: "Guatemala",
        region: "Santiago Atitlán",
        craft: "Traditional Mayan backstrap weaving",
        bio: "Third-generation weaver specializing in jaspe (ikat) and brocade techniques passed down through her family",
        photo_url: "https://images.unsplash.com/photo-1580752300992-559f8e0734e0?w=400",
        years: 25,
    },
    ArtisanSeed {
        id: "artisan-2",
        name: "Fatima Benali",
        country: "Morocco",
        region: "Fes",
        craft: "Moroccan embroidery and zellij-inspired needlework",
        bio: "Master embroiderer known for intricate geometric patterns inspired by traditional Moroccan tilework",
        photo_url: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=400",
        years: 18,
    },
    ArtisanSeed {
        id: "artisan-3",
        name: "Kenji Yamamoto",
        country: "Japan",
        region: "Tokushima",
        craft: "Indigo dyeing (Aizome) and shibori resist techniques",
        bio: "Preserving centuries-old Japanese indigo fermentation methods and traditional shibori patterns",
        photo_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400",
        years: 30,
    },
    ArtisanSeed {
        id: "artisan-4",
        name: "Rajesh Kumar",
        country: "India",
        region: "Jaipur, Rajasthan",
        craft: "Hand block printing and natural dyeing",
        bio: "Master block printer carrying forward Jaipur's Bagru and Sanganeri traditions with natural indigo and madder root dyes",
        photo_url: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=400",
        years: 22,
    },
];

struct GarmentSeed {
    id: &'static str,
    brand_id: &'static str,
    artisan_id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    price: &'static str,
    image: &'static str,
    origin: &'static str,
    materials: &'static [&'static str],
    techniques: &'static [&'static str],
    tag_id: &'static str,
    tag_code: &'static str,
}

const GARMENTS: &[GarmentSeed] = &[
    GarmentSeed {
        id: "garment-1",
        brand_id: "brand-1",
        artisan_id: "artisan-1",
        name: "Huipil de Flores",
        description: "Traditional Guatemalan embroidered blouse featuring intricate floral brocade patterns handwoven on a backstrap loom",
        category: "clothing",
        price: "285.00",
        image: "https://images.unsplash.com/photo-1617127365659-c47fa864d8bc?w=800",
        origin: "Guatemala",
        materials: &["Organic cotton", "Natural plant dyes", "Hand-spun thread"],
        techniques: &["Backstrap loom weaving", "Brocade embroidery", "Natural dyeing"],
        tag_id: "nfc-1",
        tag_code: "SUB-GT-HDF-001",
    },
    GarmentSeed {
        id: "garment-2",
        brand_id: "brand-2",
        artisan_id: "artisan-2",
        name: "Kaftan Azul",
        description: "Moroccan silk kaftan with geometric embroidery inspired by traditional zellij tilework from Fes",
        category: "clothing",
        price: "425.00",
        image: "https://images.unsplash.com/photo-1490481651871-ab68de25d43d?w=800",
        origin: "Morocco",
        materials: &["Organic silk", "Natural indigo dye", "Metallic thread accents"],
        techniques: &["Hand embroidery", "Geometric pattern work", "Natural dyeing"],
        tag_id: "nfc-2",
        tag_code: "SUB-MA-KAZ-002",
    },
    GarmentSeed {
        id: "garment-3",
        brand_id: "brand-2",
        artisan_id: "artisan-3",
        name: "Indigo Tenugui",
        description: "Japanese cotton scarf dyed with traditional indigo fermentation and featuring shibori resist patterns",
        category: "accessories",
        price: "98.00",
        image: "https://images.unsplash.com/photo-1601924994987-69e26d50dc26?w=800",
        origin: "Japan",
        materials: &["Organic cotton", "Natural indigo (sukumo)", "Plant-based mordants"],
        techniques: &["Shibori tie-dye", "Indigo fermentation", "Multiple dip dyeing"],
        tag_id: "nfc-3",
        tag_code: "SUB-JP-ITG-003",
    },
    GarmentSeed {
        id: "garment-4",
        brand_id: "brand-3",
        artisan_id: "artisan-4",
        name: "Lalita Kaftan",
        description: "Hand block printed kaftan with floral motifs in natural indigo and madder root dyes on handloom cotton",
        category: "clothing",
        price: "345.00",
        image: "/assets/lalita-kaftan.jpg",
        origin: "India",
        materials: &["100% Handloom Cotton", "Natural Indigo", "Madder Root"],
        techniques: &["Hand Block Printing", "Natural Dyeing", "Handloom Weaving"],
        tag_id: "nfc-4",
        tag_code: "SUB-IN-LKF-004",
    },
];

/// (garment, water saved, co2 offset, artisans supported, supply chain)
type ImpactSeed = (
    &'static str,
    f64,
    f64,
    i32,
    [(&'static str, &'static str, &'static str, &'static str); 4],
);

const IMPACTS: &[ImpactSeed] = &[
    (
        "garment-1",
        2500.0,
        12.0,
        3,
        [
            ("Cotton Harvest", "San Marcos, Guatemala", "2024-01", "Organic cotton harvested by local cooperative"),
            ("Natural Dyeing", "Antigua, Guatemala", "2024-02", "Traditional natural dyes prepared from cochineal and indigo"),
            ("Weaving", "Santiago Atitlán, Guatemala", "2024-03", "Handwoven by María Elena using backstrap loom"),
            ("Embroidery", "Santiago Atitlán, Guatemala", "2024-04", "Intricate brocade patterns added by hand"),
        ],
    ),
    (
        "garment-2",
        3200.0,
        18.0,
        5,
        [
            ("Silk Production", "Chefchaouen, Morocco", "2024-01", "Organic silk from local cooperative"),
            ("Natural Dyeing", "Fes, Morocco", "2024-02", "Traditional plant-based dyes"),
            ("Pattern Design", "Fes, Morocco", "2024-03", "Geometric zellij patterns mapped for embroidery"),
            ("Hand Embroidery", "Fes, Morocco", "2024-05", "Intricate needlework by Fatima Benali"),
        ],
    ),
    (
        "garment-3",
        1800.0,
        8.0,
        2,
        [
            ("Cotton Growing", "Tokushima, Japan", "2024-01", "Organic cotton cultivation"),
            ("Indigo Fermentation", "Tokushima, Japan", "2024-02", "Traditional sukumo indigo preparation"),
            ("Dyeing Process", "Tokushima, Japan", "2024-03", "Multiple dips to achieve deep blue color"),
            ("Shibori Pattern", "Tokushima, Japan", "2024-04", "Hand-tied resist patterns"),
        ],
    ),
    (
        "garment-4",
        1200.0,
        15.6,
        60,
        [
            ("Handloom Weaving", "Jaipur, Rajasthan", "2024-01", "100% handloom cotton woven without electricity"),
            ("Natural Dyeing", "Bagru, Rajasthan", "2024-02", "Dyed with natural indigo and madder root using mineral mordants"),
            ("Block Carving", "Jaipur, Rajasthan", "2024-03", "Teakwood blocks hand-carved with floral and geometric motifs"),
            ("Hand Block Printing", "Sanganeri, Rajasthan", "2024-04", "Carved blocks pressed rhythmically onto cotton stretched in sunlight"),
        ],
    ),
];

/// (id, garment, type, title, content)
const CULTURE: &[(&str, &str, &str, &str, &str)] = &[
    (
        "cultural-1-1",
        "garment-1",
        "history",
        "The Living Tradition of Guatemalan Huipiles",
        "Huipiles have been woven by Mayan women for over 2,000 years, serving as living documents of cultural identity, community belonging, and ancestral knowledge.",
    ),
    (
        "cultural-1-2",
        "garment-1",
        "technique",
        "Backstrap Loom Weaving",
        "The backstrap loom (telar de cintura) allows weavers to create intricate brocade patterns while controlling tension with their bodies.",
    ),
    (
        "cultural-1-3",
        "garment-1",
        "vocabulary",
        "Textile Terms in K'iche' Maya",
        "Jaspe (ikat dyeing) • Brocade (supplementary weft) • Randa (decorative joining stitch) • Corte (wraparound skirt) • Po't (ceremonial blouse)",
    ),
    (
        "cultural-2-1",
        "garment-2",
        "history",
        "Moroccan Kaftans: From Royal Courts to Modern Revival",
        "Kaftans were adopted by Moroccan royalty in the 12th century. Contemporary designers revive traditional embroidery while creating modern silhouettes.",
    ),
    (
        "cultural-2-2",
        "garment-2",
        "technique",
        "Zellij-Inspired Embroidery",
        "This kaftan's geometric patterns are inspired by zellij, the mosaic tilework found in Moroccan architecture, translated into embroidery.",
    ),
    (
        "cultural-2-3",
        "garment-2",
        "vocabulary",
        "Moroccan Craft Vocabulary",
        "Zellij (mosaic tilework) • Takchita (formal kaftan with outer layer) • Sfifa (decorative braided trim) • Tarz (traditional embroidery style)",
    ),
    (
        "cultural-3-1",
        "garment-3",
        "history",
        "Japan's Indigo Heritage",
        "Japanese indigo dyeing (aizome) dates back over 1,000 years. Tokushima became Japan's indigo capital during the Edo period, prized for its sukumo.",
    ),
    (
        "cultural-3-2",
        "garment-3",
        "technique",
        "Shibori Resist Dyeing",
        "Shibori encompasses dozens of techniques for creating patterns through binding, stitching, folding, and compressing fabric before dyeing.",
    ),
    (
        "cultural-3-3",
        "garment-3",
        "vocabulary",
        "Japanese Dyeing Terms",
        "Aizome (indigo dyeing) • Sukumo (fermented indigo) • Shibori (resist dyeing) • Tenugui (cotton hand towel) • Arashi (storm pattern)",
    ),
    (
        "cultural-4-1",
        "garment-4",
        "history",
        "Jaipur's Block Printing Legacy",
        "Jaipur is a centuries-old hub of textile artistry where block printing became a language of pattern and rhythm, drawing from the Bagru and Sanganeri traditions.",
    ),
    (
        "cultural-4-2",
        "garment-4",
        "technique",
        "Hand Block Printing Symbolism",
        "Floral vines represent prosperity and the life force, geometric borders symbolize balance and protection, and indigo and madder hues echo the desert's twilight.",
    ),
    (
        "cultural-4-3",
        "garment-4",
        "vocabulary",
        "Rajasthani Textile Vocabulary",
        "Bagru (natural dye block printing village) • Sanganeri (floral block printing style) • Buti (small repeated motif) • Jaal (all-over net pattern) • Dabu (mud-resist printing)",
    ),
];

/// (id, garment, washing, materials, special care, repair)
const CARE: &[(&str, &str, &str, &str, &str, &str)] = &[
    (
        "care-1",
        "garment-1",
        "Hand wash in cold water with pH-neutral soap. Avoid wringing. Lay flat to dry away from direct sunlight.",
        "100% organic cotton with natural plant-based dyes",
        "Natural dyes may fade slightly over time. Store folded in a cool, dry place.",
        "Small tears can be mended using traditional darning techniques.",
    ),
    (
        "care-2",
        "garment-2",
        "Dry clean only or hand wash in cold water with silk-safe detergent. Hang dry in shade.",
        "100% organic silk with natural indigo and metallic thread embroidery",
        "Store in a breathable garment bag. Iron on low heat while slightly damp.",
        "Complimentary artisan embroidery repair for the first 5 years.",
    ),
    (
        "care-3",
        "garment-3",
        "Hand wash in cold water. Indigo may bleed initially, so wash separately. Hang dry.",
        "100% organic cotton dyed with natural fermented indigo",
        "Indigo develops richer color with wear and washing.",
        "Cotton can be easily mended. Indigo re-dyeing services available.",
    ),
    (
        "care-4",
        "garment-4",
        "Hand wash separately in cold water with mild soap. Do not bleach. Line dry in shade.",
        "100% Handloom Cotton dyed with Natural Indigo and Madder Root",
        "Store away from direct sunlight. Color variation is part of natural dye's character.",
        "Cotton fabric can be mended with basic stitching. Contact the brand for dye refresh.",
    ),
];

/// (id, name, description, icon, required stamps, required countries, rarity)
const BADGES: &[(&str, &str, &str, &str, Option<i32>, Option<i32>, &str)] = &[
    (
        "badge-1",
        "First Steps",
        "Collected your first ethical fashion stamp",
        "https://images.unsplash.com/photo-1606115915090-be18fea23ec7?w=200",
        Some(1),
        None,
        "common",
    ),
    (
        "badge-2",
        "Culture Keeper",
        "Collected 5 stamps from different artisan traditions",
        "https://images.unsplash.com/photo-1576566588028-4147f3842f27?w=200",
        Some(5),
        None,
        "rare",
    ),
    (
        "badge-3",
        "Global Citizen",
        "Collected stamps from 3 different countries",
        "https://images.unsplash.com/photo-1526778548025-fa2f459cd5c1?w=200",
        None,
        Some(3),
        "epic",
    ),
];

/// Loads the demo catalog in one transaction. Skips when the demo user exists.
pub async fn seed_demo_data(store: &Store) -> Result<SeedSummary> {
    if store.user_exists(DEMO_USER_ID).await? {
        info!(user_id = DEMO_USER_ID, "Demo data already present, skipping seed");
        return Ok(SeedSummary {
            seeded: false,
            demo_api_key: None,
        });
    }

    let txn = store
        .conn
        .begin()
        .await
        .context("Failed to begin seed transaction")?;
    let now = now_timestamp();

    brands::Entity::insert_many(BRANDS.iter().map(|b| brands::ActiveModel {
        id: Set(b.id.to_string()),
        name: Set(b.name.to_string()),
        description: Set(Some(b.description.to_string())),
        origin: Set(Some(b.origin.to_string())),
        philosophy: Set(Some(b.philosophy.to_string())),
        sustainability_practices: Set(encode_list(b.practices)),
        website: Set(Some(b.website.to_string())),
        logo_url: Set(Some(b.logo_url.to_string())),
        is_verified: Set(true),
        created_at: Set(now.clone()),
    }))
    .exec_without_returning(&txn)
    .await
    .context("Failed to seed brands")?;

    artisans::Entity::insert_many(ARTISANS.iter().map(|a| artisans::ActiveModel {
        id: Set(a.id.to_string()),
        name: Set(a.name.to_string()),
        bio: Set(Some(a.bio.to_string())),
        photo_url: Set(Some(a.photo_url.to_string())),
        country: Set(a.country.to_string()),
        region: Set(Some(a.region.to_string())),
        craft: Set(a.craft.to_string()),
        years_of_experience: Set(Some(a.years)),
        generation: Set(None),
        is_verified: Set(true),
        created_at: Set(now.clone()),
    }))
    .exec_without_returning(&txn)
    .await
    .context("Failed to seed artisans")?;

    garments::Entity::insert_many(GARMENTS.iter().map(|g| garments::ActiveModel {
        id: Set(g.id.to_string()),
        brand_id: Set(g.brand_id.to_string()),
        artisan_id: Set(g.artisan_id.to_string()),
        name: Set(g.name.to_string()),
        description: Set(Some(g.description.to_string())),
        category: Set(g.category.to_string()),
        price: Set(g.price.to_string()),
        images: Set(encode_list(&[g.image])),
        origin: Set(g.origin.to_string()),
        materials: Set(encode_list(g.materials)),
        techniques: Set(encode_list(g.techniques)),
        is_active: Set(true),
        is_verified: Set(true),
        created_at: Set(now.clone()),
    }))
    .exec_without_returning(&txn)
    .await
    .context("Failed to seed garments")?;

    tag_codes::Entity::insert_many(GARMENTS.iter().map(|g| tag_codes::ActiveModel {
        id: Set(g.tag_id.to_string()),
        garment_id: Set(g.id.to_string()),
        code: Set(g.tag_code.to_string()),
        nfc_uid: Set(Some(g.tag_code.to_string())),
        qr_code: Set(Some(g.tag_code.to_string())),
        is_active: Set(true),
        created_at: Set(now.clone()),
    }))
    .exec_without_returning(&txn)
    .await
    .context("Failed to seed tag codes")?;

    impact_metrics::Entity::insert_many(IMPACTS.iter().enumerate().map(
        |(i, (garment_id, water, co2, artisans, steps))| {
            let steps: Vec<SupplyChainStep> = steps
                .iter()
                .zip(1..)
                .map(|((title, location, date, description), step)| SupplyChainStep {
                    step,
                    title: (*title).to_string(),
                    location: (*location).to_string(),
                    date: (*date).to_string(),
                    description: (*description).to_string(),
                })
                .collect();

            impact_metrics::ActiveModel {
                id: Set(format!("impact-{}", i + 1)),
                garment_id: Set((*garment_id).to_string()),
                water_saved: Set(Some(*water)),
                co2_offset: Set(Some(*co2)),
                artisans_supported: Set(Some(*artisans)),
                supply_chain_steps: Set(encode_list(&steps)),
                created_at: Set(now.clone()),
            }
        },
    ))
    .exec_without_returning(&txn)
    .await
    .context("Failed to seed impact metrics")?;

    cultural_content::Entity::insert_many(CULTURE.iter().map(
        |(id, garment_id, content_type, title, content)| cultural_content::ActiveModel {
            id: Set((*id).to_string()),
            garment_id: Set((*garment_id).to_string()),
            content_type: Set((*content_type).to_string()),
            title: Set((*title).to_string()),
            content: Set((*content).to_string()),
            images: Set(None),
            is_ai_generated: Set(false),
            created_at: Set(now.clone()),
        },
    ))
    .exec_without_returning(&txn)
    .await
    .context("Failed to seed cultural content")?;

    care_instructions::Entity::insert_many(CARE.iter().map(
        |(id, garment_id, washing, materials, special, repair)| care_instructions::ActiveModel {
            id: Set((*id).to_string()),
            garment_id: Set((*garment_id).to_string()),
            washing_instructions: Set(Some((*washing).to_string())),
            materials: Set(Some((*materials).to_string())),
            special_care: Set(Some((*special).to_string())),
            repair_guidance: Set(Some((*repair).to_string())),
            created_at: Set(now.clone()),
        },
    ))
    .exec_without_returning(&txn)
    .await
    .context("Failed to seed care instructions")?;

    let api_key = crate::db::repositories::user::generate_api_key();
    users::Entity::insert(users::ActiveModel {
        id: Set(DEMO_USER_ID.to_string()),
        email: Set(Some("sarah.martinez@example.com".to_string())),
        name: Set("Sarah Martinez".to_string()),
        avatar_url: Set(Some(
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=200".to_string(),
        )),
        role: Set("shopper".to_string()),
        membership_tier: Set("gold".to_string()),
        api_key: Set(api_key.clone()),
        created_at: Set(now.clone()),
    })
    .exec_without_returning(&txn)
    .await
    .context("Failed to seed demo user")?;

    let stamp_rows = [("stamp-1", "garment-1", "nfc-1"), ("stamp-2", "garment-2", "nfc-2")];
    stamps::Entity::insert_many(stamp_rows.iter().map(|(id, garment_id, tag_id)| {
        stamps::ActiveModel {
            id: Set((*id).to_string()),
            user_id: Set(DEMO_USER_ID.to_string()),
            garment_id: Set((*garment_id).to_string()),
            tag_code_id: Set(Some((*tag_id).to_string())),
            unlocked_at: Set(now_timestamp()),
            scan_location: Set(None),
        }
    }))
    .exec_without_returning(&txn)
    .await
    .context("Failed to seed stamps")?;

    badges::Entity::insert_many(BADGES.iter().map(
        |(id, name, description, icon, stamps_needed, countries_needed, rarity)| {
            badges::ActiveModel {
                id: Set((*id).to_string()),
                name: Set((*name).to_string()),
                description: Set(Some((*description).to_string())),
                icon_url: Set(Some((*icon).to_string())),
                required_stamps: Set(*stamps_needed),
                required_countries: Set(*countries_needed),
                rarity: Set(Some((*rarity).to_string())),
                created_at: Set(now.clone()),
            }
        },
    ))
    .exec_without_returning(&txn)
    .await
    .context("Failed to seed badges")?;

    user_badges::Entity::insert(user_badges::ActiveModel {
        id: Set("user-badge-1".to_string()),
        user_id: Set(DEMO_USER_ID.to_string()),
        badge_id: Set("badge-1".to_string()),
        earned_at: Set(now.clone()),
    })
    .exec_without_returning(&txn)
    .await
    .context("Failed to seed user badges")?;

    txn.commit().await.context("Failed to commit seed")?;

    info!(
        brands = BRANDS.len(),
        artisans = ARTISANS.len(),
        garments = GARMENTS.len(),
        badges = BADGES.len(),
        "Seeded demo catalog"
    );

    Ok(SeedSummary {
        seeded: true,
        demo_api_key: Some(api_key),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> Store {
        Store::with_pool_options("sqlite::memory:", 1, 1)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn seed_is_idempotent() {
        let store = memory_store().await;

        let first = seed_demo_data(&store).await.unwrap();
        assert!(first.seeded);
        assert_eq!(first.demo_api_key.as_ref().map(String::len), Some(64));

        let second = seed_demo_data(&store).await.unwrap();
        assert!(!second.seeded);
        assert!(second.demo_api_key.is_none());
    }

    #[tokio::test]
    async fn seeded_passport_snapshot_resolves_fully() {
        let store = memory_store().await;
        seed_demo_data(&store).await.unwrap();

        let snapshot = store
            .load_passport_snapshot(DEMO_USER_ID)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(snapshot.stamps.len(), 2);
        assert_eq!(snapshot.garments.items.len(), 2);
        assert!(snapshot.garments.unresolved.is_empty());
        assert_eq!(snapshot.user_badges.len(), 1);
    }
}
