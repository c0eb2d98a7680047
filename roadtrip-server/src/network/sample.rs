//! Built-in sample road network.
//!
//! A hand-made subset of the US interstate network with approximate road
//! distances in miles. Used by the server binary and by tests that want a
//! realistically shaped graph.

use super::{NetworkBuilder, RoadNetwork};

/// Create the sample US road network with its attractions.
pub fn us_network() -> RoadNetwork {
    NetworkBuilder::new()
        // Texas and the Gulf
        .road("Houston TX", "San Antonio TX", 197)
        .road("Houston TX", "Dallas TX", 239)
        .road("Houston TX", "Austin TX", 165)
        .road("Austin TX", "San Antonio TX", 80)
        .road("Austin TX", "Dallas TX", 195)
        .road("San Antonio TX", "El Paso TX", 551)
        .road("Dallas TX", "Oklahoma City OK", 206)
        .road("Dallas TX", "Memphis TN", 452)
        .road("Houston TX", "New Orleans LA", 348)
        // Southwest
        .road("El Paso TX", "Tucson AZ", 317)
        .road("El Paso TX", "Albuquerque NM", 267)
        .road("Tucson AZ", "Phoenix AZ", 113)
        .road("Phoenix AZ", "Los Angeles CA", 373)
        .road("Phoenix AZ", "Las Vegas NV", 297)
        .road("Phoenix AZ", "Albuquerque NM", 420)
        // West coast
        .road("Los Angeles CA", "San Diego CA", 120)
        .road("Los Angeles CA", "San Jose CA", 340)
        .road("Los Angeles CA", "Las Vegas NV", 270)
        .road("San Jose CA", "San Francisco CA", 48)
        .road("San Francisco CA", "Sacramento CA", 88)
        .road("Sacramento CA", "Portland OR", 580)
        .road("Portland OR", "Seattle WA", 174)
        // Mountain west and plains
        .road("Sacramento CA", "Salt Lake City UT", 650)
        .road("Las Vegas NV", "Salt Lake City UT", 420)
        .road("Salt Lake City UT", "Denver CO", 520)
        .road("Albuquerque NM", "Denver CO", 447)
        .road("Albuquerque NM", "Oklahoma City OK", 546)
        .road("Denver CO", "Kansas City MO", 606)
        .road("Oklahoma City OK", "Kansas City MO", 348)
        // Midwest
        .road("Kansas City MO", "St Louis MO", 248)
        .road("St Louis MO", "Chicago IL", 297)
        .road("St Louis MO", "Springfield IL", 97)
        .road("Springfield IL", "Chicago IL", 202)
        .road("St Louis MO", "Indianapolis IN", 243)
        .road("St Louis MO", "Memphis TN", 284)
        .road("Chicago IL", "Indianapolis IN", 183)
        .road("Indianapolis IN", "Columbus OH", 175)
        .road("Chicago IL", "Cleveland OH", 344)
        .road("Columbus OH", "Cleveland OH", 143)
        .road("Columbus OH", "Pittsburgh PA", 185)
        .road("Cleveland OH", "Buffalo NY", 191)
        .road("Cleveland OH", "Pittsburgh PA", 134)
        // Northeast
        .road("Pittsburgh PA", "Philadelphia PA", 305)
        .road("Pittsburgh PA", "Washington DC", 245)
        .road("Buffalo NY", "Albany NY", 290)
        .road("Albany NY", "New York NY", 150)
        .road("Albany NY", "Boston MA", 170)
        .road("New York NY", "Boston MA", 215)
        .road("New York NY", "Philadelphia PA", 97)
        .road("Philadelphia PA", "Washington DC", 140)
        // Southeast
        .road("Washington DC", "Atlanta GA", 640)
        .road("Memphis TN", "Nashville TN", 212)
        .road("Nashville TN", "Atlanta GA", 250)
        .road("Nashville TN", "Indianapolis IN", 288)
        .road("Memphis TN", "New Orleans LA", 395)
        .road("New Orleans LA", "Atlanta GA", 470)
        .road("Atlanta GA", "Jacksonville FL", 346)
        .road("Jacksonville FL", "Orlando FL", 141)
        .road("Orlando FL", "Miami FL", 235)
        .road("New Orleans LA", "Jacksonville FL", 546)
        // Attractions
        .attraction("Hollywood Sign", "Los Angeles CA")
        .attraction("Liberty Bell", "Philadelphia PA")
        .attraction("Millennium Park", "Chicago IL")
        .attraction("Statue of Liberty", "New York NY")
        .attraction("The Alamo", "San Antonio TX")
        .attraction("Golden Gate Bridge", "San Francisco CA")
        .attraction("Space Needle", "Seattle WA")
        .attraction("Las Vegas Strip", "Las Vegas NV")
        .attraction("Walt Disney World", "Orlando FL")
        .attraction("Gateway Arch", "St Louis MO")
        .attraction("National Mall", "Washington DC")
        .attraction("French Quarter", "New Orleans LA")
        .attraction("Graceland", "Memphis TN")
        .attraction("Rock and Roll Hall of Fame", "Cleveland OH")
        .attraction("Niagara Falls", "Buffalo NY")
        .attraction("Country Music Hall of Fame", "Nashville TN")
        .attraction("Space Center Houston", "Houston TX")
        .attraction("Freedom Trail", "Boston MA")
        .attraction("Balboa Park", "San Diego CA")
        .attraction("Red Rocks Amphitheatre", "Denver CO")
        // Decorative positions for a handful of hubs
        .place("Houston TX", 29.76, -95.37)
        .place("Philadelphia PA", 39.95, -75.17)
        .place("Chicago IL", 41.88, -87.63)
        .place("Los Angeles CA", 34.05, -118.24)
        .place("New York NY", 40.71, -74.01)
        .build()
}
