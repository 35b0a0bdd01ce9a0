use crate::models::{PlantGuide, RegionalPlant};

/// Tip block for a regional plant.
///
/// The season only decorates the heading (upper-cased); which block is
/// returned depends on the plant alone.
pub fn regional_plant_advice(plant: &RegionalPlant, season: &str) -> String {
    let Some(guide) = plant.guide else {
        return synthesized_advice(plant, season);
    };

    let (heading, tips) = guide_text(guide);
    format!("{} ({}):\n{}", heading, season.to_uppercase(), tips)
}

fn guide_text(guide: PlantGuide) -> (&'static str, &'static str) {
    match guide {
        PlantGuide::Beetroot => (
            "🟣 BEETROOT TIPS",
            "• Plant beetroot seeds in spring when it's not too hot
• Water them every 2-3 days
• They like sunny spots in your garden
• You can eat both the roots and the leaves
• Ready to harvest in about 8-10 weeks
• Pull them out when they are about the size of a tennis ball",
        ),
        PlantGuide::Gazania => (
            "🌼 GAZANIA TIPS",
            "• These are South African flowers - very easy to grow!
• Plant them in a sunny spot
• Water them once a week (they don't need much water)
• Flowers close at night and open in the sun
• Remove old flowers to get more blooms
• They come in many bright colors",
        ),
        PlantGuide::Imphepho => (
            "🌿 IMPHEPHO TIPS",
            "• This is a traditional South African herb
• Plant in summer when it's warm
• Needs very little water once it grows
• Used for cleansing and traditional medicine
• Grows wild in the mountains
• Harvest leaves and dry them for use",
        ),
        PlantGuide::Strelitzia => (
            "🦅 BIRD OF PARADISE TIPS",
            "• South Africa's most famous flower!
• Needs lots of sun and warmth
• Water regularly in summer
• Takes 3-4 years to flower from seed
• Protect from strong wind
• The orange and blue flowers look like a bird",
        ),
        PlantGuide::Mealies => (
            "🌽 mealies TIPS",
            "• mealies is what we call corn in South Africa
• Plant in spring, harvest in autumn
• Needs lots of water when growing
• Plant in rows with space between plants
• Ready when the kernels are fat and yellow
• Great for pap, braai, or eating fresh",
        ),
        PlantGuide::Protea => (
            "🌸 PROTEA TIPS",
            "• This is South Africa's national flower!
• Grows naturally in the Western Cape
• Needs very little water (too much water kills them)
• Plant in sandy, well-draining soil
• Don't use fertilizer - they don't like it
• Beautiful flowers last long when cut",
        ),
        PlantGuide::Buchu => (
            "🌿 BUCHU TIPS",
            "• Traditional Khoi-San medicinal plant
• Grows naturally in Western Cape mountains
• Needs very little water
• Harvest leaves for tea
• Used for kidney and stomach problems
• Plant in winter, grows slowly but lives long",
        ),
        PlantGuide::Cycad => (
            "🌴 CYCAD TIPS",
            "• Very old plant - older than dinosaurs!
• Grows very slowly (a few cm per year)
• Doesn't need much water
• Can live for hundreds of years
• Male and female plants are different
• Don't take from the wild - they are protected",
        ),
    }
}

fn synthesized_advice(plant: &RegionalPlant, season: &str) -> String {
    format!(
        "{} {} TIPS:\n• This {} is good for {}\n• {}\n• Ask at your local nursery for more help",
        plant.emoji,
        plant.name.to_uppercase(),
        plant.category,
        season,
        plant.description
    )
}
