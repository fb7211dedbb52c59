//! The shipped product catalog.
//!
//! Catalog entries are defined here at build time and never change at
//! runtime. IDs are stable: existing IDs must not be reused or renumbered
//! when products are added or retired.

use std::sync::LazyLock;

use lubemart_core::{CurrencyCode, Price, ProductId};

use crate::product::{Category, Product, ProductDetails};

static CATALOG: LazyLock<Vec<Product>> = LazyLock::new(build_catalog);

/// The full catalog, in canonical catalog order.
#[must_use]
pub fn catalog() -> &'static [Product] {
    &CATALOG
}

fn usd(cents: i64) -> Price {
    Price::from_cents(cents, CurrencyCode::USD)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn base(
    id: i32,
    name: &str,
    category: Category,
    image: &str,
    price_cents: i64,
    description: &str,
    sizes: &[&str],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        category,
        image: image.to_owned(),
        price: usd(price_cents),
        description: description.to_owned(),
        sizes: strings(sizes),
        featured: false,
        new_arrival: false,
        best_seller: false,
        video_url: None,
        details: None,
    }
}

fn details(
    specifications: &[&str],
    features: &[&str],
    applications: &[&str],
    benefits: &[&str],
) -> Option<ProductDetails> {
    Some(ProductDetails {
        specifications: strings(specifications),
        features: strings(features),
        applications: strings(applications),
        benefits: strings(benefits),
    })
}

#[allow(clippy::too_many_lines)]
fn build_catalog() -> Vec<Product> {
    vec![
        Product {
            featured: true,
            best_seller: true,
            details: details(
                &["API SL", "JASO MA-2"],
                &[
                    "Superior protection for engine, clutch and gears of a motor cycle",
                    "Helps you to derive the best performance from your bike all the time",
                    "Ensures high engine durability",
                    "Excellent seal compatibility",
                ],
                &[
                    "Recommended for new generation geared 4-stroke bikes manufactured by all the reputed manufacturers like Hero Motocorp, Bajaj Auto, Yamaha, Honda, Suzuki, TVS, Royal Enfield etc.",
                ],
                &[
                    "High engine durability",
                    "High fuel efficiency",
                    "Low oil consumption",
                    "Lower maintenance cost",
                    "Longer oil and engine life",
                ],
            ),
            ..base(
                1,
                "FAST TRACK 4T 20W-40 SL GRADE",
                Category::Motorcycle,
                "/images/fastrack.png",
                2499,
                "LUBEMART FAST TRACK grade is a premium quality motor cycle engine oil made to cater to the highly demanding lubrication requirements of modern 4-Stroke geared bikes.",
                &["900 ML", "1L", "5L", "210L"],
            )
        },
        Product {
            featured: true,
            details: details(
                &["API CG-4"],
                &[
                    "Made from highly paraffinic base stocks and fortified with select additives",
                    "Delivers excellent protection against oxidation and nitration",
                    "Balanced detergency helps to protect the engine from wear and deposits",
                    "Specially formulated for longer service intervals",
                ],
                &[
                    "Recommended for all types of autos, passenger cars and minibuses running on CNG/LPG fuel",
                    "Can also be used in petrol engines",
                ],
                &[
                    "Suitable for use in all seasons and helps in reducing oil consumption",
                    "Extended oil life due to excellent oxidation and nitration resistance",
                    "Excellent high temperature stability, detergency and dispersancy",
                    "Longer oil drain interval",
                ],
            ),
            ..base(
                2,
                "GO GREEN 20W-50 CNG API CG",
                Category::PassengerCar,
                "/images/cng-new.jpg",
                2699,
                "LUBEMART CNG SPECIAL 20W-50 is a premium quality engine oil developed for CNG/LPG autos, passenger cars and minibuses running on CNG/LPG.",
                &[
                    "500 ML", "1L", "2L", "2.5L", "3L", "3.5L", "5L", "7.5L", "10L", "15L",
                    "20L", "26L", "50L", "210L",
                ],
            )
        },
        Product {
            best_seller: true,
            details: details(
                &["API SF/CC", "SAE 20W-40"],
                &["Viscometrics - SAE 20W-40", "Meets API SF/CC performance levels"],
                &[
                    "Suitable both petrol & diesel engines",
                    "Recommended for all types passenger vehicles trucks tractors DG set etc.",
                ],
                &[
                    "Possesses improved oxidation stability",
                    "Anti-rust properties. Gives excellent protection to the engine",
                ],
            ),
            ..base(
                3,
                "NAVIGATOR 20W-40 API SF/CC",
                Category::Multigrade,
                "/images/navigator3.PNG",
                1999,
                "LUBEMART 20W-40 is a economy multigrade engine oil suitable both petrol & diesel engines.",
                &[
                    "500ML", "1L", "2L", "2.5L", "3L", "3.5L", "5L", "7.5L", "10L", "15L",
                    "20L", "26L", "50L", "210L",
                ],
            )
        },
        Product {
            details: details(
                &["API SL", "JASO MA2"],
                &[],
                &["Recommended for high performance motor cycles of Bajaj"],
                &[
                    "Longer drain intervals",
                    "Smooth clutch performance",
                    "Reduced friction in engine",
                    "Clean engine parts & longer engine life",
                ],
            ),
            ..base(
                4,
                "VICTOR 20W-50 API SL JASO MA2",
                Category::HeavyDuty,
                "/images/victor.png",
                2299,
                "LUBEMART VICTOR 4T 20W50 is a high performance 4T engine oil specially developed for Bajaj range of two wheelers.",
                &["500ML", "1L", "2L", "2.5L", "3L", "3.5L", "5L", "26L", "50L", "210L"],
            )
        },
        Product {
            featured: true,
            new_arrival: true,
            video_url: Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_owned()),
            details: details(
                &["API SN", "JASO MA2", "BS-VI compatible"],
                &[
                    "Reduce heat & friction",
                    "Quick cold start",
                    "Superior protection from wear & rust",
                    "Keeps engine cool & clean",
                    "Excellent seal compatibility",
                    "Ultimate protection to engine, gear & clutch",
                    "Catalyst compatible",
                ],
                &[
                    "Due to its synergistic combination of premium quality base stocks and performance additive system",
                    "It delivers optimum performance at elevated temperatures and harsh environmental conditions with smooth and comfortable riding experience",
                ],
                &[],
            ),
            ..base(
                5,
                "HULK 4T 15W-50 API SN JASO MA2",
                Category::HeavyDuty,
                "/images/bullet-new.jpg",
                2999,
                "LUBEMART 4T 15W-50 is high performance, synthetic technology motorcycle engine oil specially engineered for high power 4-stroke motorcycles.",
                &["2.5L"],
            )
        },
        Product {
            details: details(
                &["API SN PLUS", "BS-VI compatible"],
                &[],
                &[
                    "Recommended for various models of BS VI compliant passenger cars running on Petrol or Diesel and requiring a SAE 5W-30 or 5W-40 viscosity engine oil",
                ],
                &[
                    "Low SAPS technology for excellent after treatment compatibility",
                    "Suitable for BS VI compliant passenger Cars/SUVs",
                    "Also suitable for petrol engines equipped with GDI/TGDI technology",
                    "Specifically designed to help prevent LSPI in TGDI engines",
                    "Enhanced fuel efficiency",
                    "Superior engine cleanliness",
                    "Longer engine life",
                ],
            ),
            ..base(
                6,
                "ELITE 5W30 API SN PLUS",
                Category::FullySynthetic,
                "/images/elite-new.jpg",
                3299,
                "LUBEMART ELITE is an super premium synthetic engine oil based on advanced Low SAPS additive technology to deliver excellent performance in modern day engines of latest generation BS-VI and above.",
                &["3L", "3.5L", "4L", "4.5L", "5L"],
            )
        },
        Product {
            details: details(
                &["API CI-4 PLUS", "API SN"],
                &[],
                &[
                    "Recommended for new generation (BS VI) diesel engines in trucks, buses, construction equipment, etc.",
                    "Suitable for use in EGR/SCR type After Treatment Devices",
                ],
                &[],
            ),
            ..base(
                7,
                "GIANT 15W-40 API CI-4 PLUS",
                Category::HeavyDutyDiesel,
                "/images/giant.png",
                2499,
                "LUBEMART GIANT 15W-40 CI-4/SN grades are super premium quality diesel engine oil made from the finest paraffinic base stocks and state of art additive technology, specifically for the modern low emission diesel engines.",
                &[
                    "500 ML", "1L", "2L", "2.5L", "3L", "3.5L", "5L", "7.5L", "10L", "15L",
                    "20L", "26L", "50L", "210L",
                ],
            )
        },
        Product {
            details: details(
                &["API SM", "BS-VI compatible"],
                &[],
                &[
                    "Formulated with premium quality base stocks and a high performance additive system for excellent performance and optimum power output",
                    "Recommended for 4-stroke motorcycles of all leading OEM's recommending SAE 20W-40 grade engine oil",
                ],
                &[
                    "Longer engine life",
                    "Smooth clutch operation",
                    "Keeps the engine cool & clean",
                    "Reduces engine noise & vibrations",
                    "Superior protection from friction, wear & rust",
                    "Catalyst compatible",
                ],
            ),
            ..base(
                8,
                "RIDER 4T 20W-40 API SM",
                Category::Motorcycle,
                "/images/gpt rider.png",
                1999,
                "LUBEMART 4T 20W-40 is high performance, synthetic technology 4-stroke motorcycle engine oil specially developed for new generation motorcycles.",
                &["900 ML", "1L", "20 L", "50 L", "210 L"],
            )
        },
        Product {
            new_arrival: true,
            details: details(
                &["GL-4"],
                &[],
                &[
                    "Recommended for transaxles requiring GL-4 performance, passenger cars, trucks, construction mining and agricultural equipment",
                    "Can be used where spiral bevel gears operate under moderate to severe speeds and loads with hypoid gears",
                ],
                &[
                    "Excellent seal compatibility",
                    "Protection against rust and corrosion",
                    "Outstanding thermal and chemical stability",
                    "Excellent extreme pressure and anti-wear properties",
                ],
            ),
            ..base(
                9,
                "AUTO GEAR EP 90/EP 140/EP 80W90/EP 85W140",
                Category::GearOil,
                "/images/gear.png",
                2199,
                "LUBEMART Gear Oils is a high performance gear oil designed to provide excellent lubrication in wide range of automotive and transmission and axle drives where GL-4 performance is required.",
                &["500 ML", "1L", "2L", "2.5L", "5L", "7L", "10L", "20L", "26L", "50L", "210L"],
            )
        },
        Product {
            details: details(
                &[],
                &[],
                &[
                    "Recommended for all tractors including Eicher, Escorts, Mahindra & Mahindra, SAME, Swaraj, Sonalika, TAFE etc.",
                    "Can also be used in other off-road/construction equipment requiring UTTO type transmission fluid",
                ],
                &[
                    "Single oil for wet brakes, hydraulics and transmission",
                    "Noise free operation of Oil Immersed Brakes (OIB)",
                    "Protection against rust and corrosion",
                    "Longer oil and equipment life",
                ],
            ),
            ..base(
                10,
                "SMOOTH WET BREAK UTTO",
                Category::Transmission,
                "/images/smooth-wet.png",
                2399,
                "LUBEMART WET BREAK OIL is a Universal Tractor Transmission Oil (UTTO) formulated from high quality base stocks and carefully selected additives, designed to deliver superior performance in transmission, hydraulic, final drive and PTO systems of tractors.",
                &["500 ML", "1L", "2L", "2.5L", "5L", "7L", "10L", "20L", "26L", "50L", "210L"],
            )
        },
        Product {
            details: details(
                &[],
                &[],
                &[
                    "Recommended for all vehicles where GM Dexron and Ford Mercon fluids are required",
                    "Recommended for power shift transmissions, automatic transmissions, manual gear box and torque converter units",
                ],
                &[
                    "Excellent gear shifting and smooth clutch action",
                    "Very good corrosion protection",
                    "Superior anti-wear protection and oxidation control",
                    "Very low pour point for cold weather starts",
                    "Superior seal compatibility",
                ],
            ),
            ..base(
                11,
                "AUTOMATOR ATF TQ DEX III",
                Category::Transmission,
                "/images/transmission-new.jpg",
                1999,
                "LUBEMART ATF TQ D III is premium high performance Automatic Transmission Fluid formulated by specially selected base oils and additive technology for automatic and semi-automatic transmissions, power steering units, torque converters of cars and light commercial vehicles.",
                &["500 ML", "1L", "2L", "2.5L", "5L", "7L", "10L", "20L", "26L", "50L", "210L"],
            )
        },
        Product {
            details: details(
                &[],
                &[
                    "Additives enhance the oxidation stability, anti-rust characteristics and anti-wear properties of the oil",
                    "Natural demulsification property, low foaming tendency and quick air release",
                ],
                &[],
                &[
                    "Better lubrication of rotors and bearings, reducing heat generation and operating temperatures",
                    "Enhanced wear protection for prolonged maintenance-free equipment life",
                    "Outstanding oxidation and thermal stability",
                    "Maintains excellent internal surface cleanliness",
                    "Good protection against corrosion",
                    "Excellent seal compatibility",
                ],
            ),
            ..base(
                12,
                "ULTIMATE 68",
                Category::Hydraulic,
                "/images/ultimate-68.png",
                1899,
                "LUBEMART HYDRAULIC OIL is blended from deep hydrofinished base stocks and select additives. The additives are designed for optimum compressor operation.",
                &["500 ML", "1L", "2L", "2.5L", "5L", "7L", "10L", "20L", "26L", "50L", "210L"],
            )
        },
        Product {
            new_arrival: true,
            video_url: Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_owned()),
            details: details(
                &["API SN+", "JASO MB"],
                &[
                    "Outstanding pick-up",
                    "Lower fuel consumption",
                    "Lower oil consumption",
                    "Smooth clutch operation",
                    "Superior engine cleanliness",
                    "Excellent gear protection",
                    "Optimum engine protection in tough conditions",
                ],
                &[
                    "Delivers increased engine power, minimal oil consumption, outstanding film thickness and a smooth riding experience even at elevated temperatures",
                    "Recommended for new generation 4-stroke motorcycles of all leading OEM's recommending 10W-30 grade engine oil",
                ],
                &[],
            ),
            ..base(
                13,
                "RACE MAX 10W-30 API SN+ / JASO MB",
                Category::Motorcycle,
                "/images/race-max.png",
                2799,
                "LUBEMART RACE MAX 10W-30 is premium quality engine oil with molecules based on \"ADVANCED POWER TECHNOLOGY\" (APT) for high performance 4-Stroke motorcycles.",
                &["800 ML", "900 ML", "1L", "5L", "210L"],
            )
        },
        Product {
            details: details(
                &["API SN+", "JASO MA2", "BS-VI compliant"],
                &[
                    "Suitable for BS VI compliant bikes",
                    "Unmatched engine protection, leading to longer engine life",
                    "Negligible viscosity loss",
                    "Ensures smooth clutch operation for better pick-up",
                    "Better mileage & longer oil life",
                ],
                &[
                    "Manufactured from a synergistic blend of fully synthetic Poly Alpha Olefins (PAO) & Ester base stocks and state of art additive technology",
                    "Recommended for new generation BS VI compliant geared 4-stroke bikes, especially those with engine displacement of 350 cc and above",
                ],
                &[],
            ),
            ..base(
                14,
                "AVENGER 4T 10W-40 API SN+ / JASO MA2",
                Category::Motorcycle,
                "/images/avenger.png",
                2499,
                "LUBEMART 10W-40 is a super premium quality synthetic motorcycle engine oil made to cater to the highly demanding lubrication requirements of modern High Powered 4-Stroke geared bikes.",
                &["900 ML", "1L"],
            )
        },
        Product {
            details: details(
                &[
                    "Use LUBEMART Coolant in all models of Car, LCV, HCV, Tractor, Generator and any engine/machine cooling system in factories",
                ],
                &[],
                &[
                    "Flush and clean the cooling system before filling",
                    "Fill LUBEMART Coolant Ready to Use directly to the expansion bottle to a level between the LOW and FULL marks",
                    "Check the level periodically and top-up with LUBEMART coolant",
                ],
                &[],
            ),
            ..base(
                15,
                "COOL TECH",
                Category::Coolant,
                "/images/coolant.png",
                1599,
                "LUBEMART Coolant prevents engine cooling system from over heating, freezing, scaling, rusting and foaming. It lubricates the water pump and rubber hoses for a long life coolant.",
                &["500 ML", "1L", "3L", "5L", "50 L", "210 L"],
            )
        },
        Product {
            featured: true,
            details: details(
                &["API SN+", "JASO MA2"],
                &[
                    "Suitable for BS VI compliant bikes",
                    "Unmatched engine protection",
                    "High fuel efficiency",
                    "Low oil consumption",
                    "Longer oil & engine life",
                ],
                &[
                    "Manufactured from finest quality paraffinic base stocks and state of the art additive technology",
                    "Recommended for new BS-VI compliant geared 4-stroke bikes from Hero Motors, Bajaj, Yamaha, Honda, Suzuki, TVS, Royal Enfield, etc.",
                    "Also recommended for use in previous engine models",
                ],
                &[],
            ),
            ..base(
                16,
                "TITAN 4T 20W-40 API SN+ / JASO MA2",
                Category::Motorcycle,
                "/images/titan.png",
                2299,
                "LUBEMART TITAN grades are premium quality motorcycle engine oils made to cater to the highly demanding lubrication requirements of modern 4-Stroke geared bikes.",
                &["900 ML", "1L", "50 L", "210 L"],
            )
        },
        Product {
            details: details(
                &["API TC", "JASO FC"],
                &[],
                &[
                    "Recommended for lubrication of Mopeds, Scooters, Motorcycles and Auto rickshaws, operating on two stroke engines",
                ],
                &[
                    "Low exhaust smoke",
                    "Excellent engine cleanliness",
                    "Minimizes spark plug fouling",
                    "Reduces port deposits and ring sticking",
                    "Prevents seizure and scuffing",
                ],
            ),
            ..base(
                17,
                "MASTER 2T API TC JASO FC",
                Category::TwoStroke,
                "/images/master-2t.png",
                1699,
                "LUBEMART 2T OIL is low smoke two stroke engine oil developed to meet the critical requirements of two stroke engines manufactured by all leading auto makers.",
                &["500 ML", "1L"],
            )
        },
        Product {
            best_seller: true,
            details: details(
                &["API SN PLUS", "BS-VI compatible"],
                &[],
                &[
                    "Manufactured from finest API Group IV base stocks to meet the most stringent requirements of API SN, ACEA A3/B4",
                    "Suitable for cars running on petrol or diesel fuels",
                ],
                &[
                    "Low SAPS technology for excellent after treatment compatibility",
                    "Suitable for petrol engines equipped with GDI/TGDI technology",
                    "Specifically designed to help prevent LSPI in TGDI engines",
                    "Enhanced fuel efficiency",
                    "Superior engine cleanliness",
                    "Longer engine life",
                ],
            ),
            ..base(
                18,
                "ADVANCE 5W40 API SN PLUS",
                Category::FullySynthetic,
                "/images/advance1.png",
                3499,
                "LUBEMART ADVANCE 5W-40 is a high quality synthetic engine oil specifically designed for modern cars running on Petrol (GDI/TGDI).",
                &["2.5L"],
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_non_empty() {
        assert_eq!(catalog().len(), 18);
    }

    #[test]
    fn test_product_ids_are_unique_and_ordered() {
        let ids: Vec<i32> = catalog().iter().map(|p| p.id.as_i32()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted, "catalog IDs must be unique and in order");
    }

    #[test]
    fn test_every_product_has_at_least_one_size() {
        for product in catalog() {
            assert!(!product.sizes.is_empty(), "{} has no sizes", product.name);
        }
    }

    #[test]
    fn test_prices_are_positive() {
        for product in catalog() {
            assert!(
                product.price.amount.is_sign_positive(),
                "{} has a non-positive price",
                product.name
            );
        }
    }
}
