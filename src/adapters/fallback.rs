use crate::domain::model::{Destination, Package, Service, Testimonial};

/// Bundled static catalog. Served only when no real data has ever been
/// fetched in the session; once the backend has answered, this data never
/// silently reappears.
pub struct FallbackCatalog {
    packages: Vec<Package>,
    destinations: Vec<Destination>,
    testimonials: Vec<Testimonial>,
    services: Vec<Service>,
}

impl FallbackCatalog {
    pub fn bundled() -> Self {
        Self {
            packages: bundled_packages(),
            destinations: bundled_destinations(),
            testimonials: bundled_testimonials(),
            services: bundled_services(),
        }
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn into_packages(self) -> Vec<Package> {
        self.packages
    }
}

fn package(
    id: &str,
    title: &str,
    location: &str,
    country: &str,
    duration: &str,
    price: f64,
    rating: f64,
    tag: Option<&str>,
    slots: Option<u32>,
    description: &str,
    inclusions: &[&str],
    featured: bool,
) -> Package {
    Package {
        id: id.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        country: country.to_string(),
        duration: duration.to_string(),
        price,
        rating,
        tag: tag.map(str::to_string),
        slots,
        description: description.to_string(),
        inclusions: inclusions.iter().map(|s| s.to_string()).collect(),
        is_active: None,
        featured,
    }
}

fn bundled_packages() -> Vec<Package> {
    vec![
        package(
            "1",
            "Magical Bali Experience",
            "Bali",
            "Indonesia",
            "7 Days / 6 Nights",
            4999.0,
            4.9,
            Some("Open Trip"),
            Some(4),
            "Experience the magic of Bali with our curated tour package featuring temples, rice terraces, and stunning beaches.",
            &["Hotel Accommodation", "Daily Breakfast", "Private Transport", "Tour Guide", "Temple Visits", "Beach Activities"],
            true,
        ),
        package(
            "2",
            "Santorini Dream Escape",
            "Santorini",
            "Greece",
            "5 Days / 4 Nights",
            7999.0,
            4.8,
            Some("Private"),
            None,
            "Discover the romantic beauty of Santorini with white-washed buildings and stunning sunsets over the Aegean Sea.",
            &["Luxury Hotel", "All Meals", "Wine Tasting", "Sunset Cruise", "Photography Tour"],
            true,
        ),
        package(
            "3",
            "Dubai Luxury Adventure",
            "Dubai",
            "UAE",
            "4 Days / 3 Nights",
            3499.0,
            4.7,
            Some("Limited Seats"),
            Some(2),
            "Experience the glamour of Dubai with desert safaris, luxury shopping, and iconic landmarks.",
            &["5-Star Hotel", "Desert Safari", "Burj Khalifa Access", "Dubai Mall Tour", "Creek Cruise"],
            true,
        ),
        package(
            "4",
            "Maldives Paradise Retreat",
            "Maldives",
            "Maldives",
            "6 Days / 5 Nights",
            12999.0,
            5.0,
            Some("Premium"),
            None,
            "Ultimate luxury in the Maldives with overwater villas, crystal-clear waters, and world-class service.",
            &["Overwater Villa", "All-Inclusive Meals", "Spa Treatment", "Snorkeling", "Private Beach Dinner"],
            true,
        ),
        package(
            "5",
            "Bali Cultural Journey",
            "Ubud, Bali",
            "Indonesia",
            "5 Days / 4 Nights",
            3299.0,
            4.6,
            Some("Open Trip"),
            Some(8),
            "Deep dive into Balinese culture with temple ceremonies, traditional arts, and local cuisine.",
            &["Boutique Hotel", "Cooking Class", "Art Workshop", "Temple Tours", "Local Guide"],
            false,
        ),
        package(
            "6",
            "Greek Island Hopping",
            "Athens & Islands",
            "Greece",
            "10 Days / 9 Nights",
            11999.0,
            4.9,
            None,
            None,
            "Explore multiple Greek islands including Santorini, Mykonos, and Athens.",
            &["Island Hotels", "Ferry Transfers", "Guided Tours", "Traditional Meals", "Beach Access"],
            false,
        ),
    ]
}

fn bundled_destinations() -> Vec<Destination> {
    vec![
        Destination {
            id: "bali".to_string(),
            name: "Bali".to_string(),
            country: "Indonesia".to_string(),
            package_count: 12,
        },
        Destination {
            id: "santorini".to_string(),
            name: "Santorini".to_string(),
            country: "Greece".to_string(),
            package_count: 8,
        },
        Destination {
            id: "dubai".to_string(),
            name: "Dubai".to_string(),
            country: "UAE".to_string(),
            package_count: 15,
        },
        Destination {
            id: "maldives".to_string(),
            name: "Maldives".to_string(),
            country: "Maldives".to_string(),
            package_count: 6,
        },
    ]
}

fn bundled_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "1".to_string(),
            name: "Sarah Johnson".to_string(),
            location: "Dubai, UAE".to_string(),
            rating: 5.0,
            content: "An absolutely incredible experience! Everything was organized perfectly, \
                      from the moment we landed to our departure."
                .to_string(),
            trip: "Bali Adventure Package".to_string(),
        },
        Testimonial {
            id: "2".to_string(),
            name: "Ahmed Al Maktoum".to_string(),
            location: "Abu Dhabi, UAE".to_string(),
            rating: 5.0,
            content: "The best travel agency I've ever worked with. The Maldives trip was pure \
                      luxury!"
                .to_string(),
            trip: "Maldives Luxury Retreat".to_string(),
        },
        Testimonial {
            id: "3".to_string(),
            name: "Emily Chen".to_string(),
            location: "Singapore".to_string(),
            rating: 5.0,
            content: "Amazed by the level of service and the beautiful destinations. The Greece \
                      tour exceeded all expectations."
                .to_string(),
            trip: "Santorini Dream Escape".to_string(),
        },
    ]
}

fn bundled_services() -> Vec<Service> {
    let entries = [
        ("visa", "Visa Services", "Hassle-free visa processing for all destinations. We handle the paperwork so you can focus on your trip.", "FileCheck"),
        ("tours", "Tour Packages", "Curated travel packages with the best experiences, accommodations, and local guides.", "Map"),
        ("custom", "Custom Trips", "Personalized itineraries tailored to your preferences, budget, and travel style.", "Sparkles"),
        ("group", "Group Tours", "Join fellow travelers on exciting group adventures with shared experiences.", "Users"),
        ("hotels", "Hotel Booking", "Access to premium hotels and resorts worldwide at competitive prices.", "Building"),
        ("flights", "Flight Booking", "Best flight deals and seamless booking for your travel needs.", "Plane"),
    ];

    entries
        .into_iter()
        .map(|(id, title, description, icon)| Service {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        })
        .collect()
}
