use routemap::prelude::*;

/// Builds a route scene from a sample payload and walks through it the way
/// a hosting renderer would.
fn main() -> Result<()> {
    env_logger::init();

    println!("🗺️ Route Map Demo");
    println!("=================");

    // The payload a route-planning backend would embed in its page:
    // Buenos Aires to Montevideo, with weather at both ends, a couple of
    // restaurants, and checkpoints every 50 km.
    let mut data = RouteMapData::from_coordinates(vec![
        [-58.3816, -34.6037],
        [-57.5759, -34.4721],
        [-56.1645, -34.9011],
    ]);
    data.origin_weather = Some(WeatherReport::new(18.0, "scattered clouds", "03d"));
    data.destination_weather = Some(WeatherReport::from_error("Invalid API key"));
    data.origin_pois = vec![PointOfInterest {
        name: "Cafe Tortoni".to_string(),
        lat: -34.6085,
        lon: -58.3784,
    }];
    data.destination_pois = vec![PointOfInterest {
        name: "Mercado del Puerto".to_string(),
        lat: -34.9059,
        lon: -56.2116,
    }];
    data.checkpoints = generate_checkpoints(
        &data.path(),
        &CheckpointOptions {
            interval_km: 50.0,
            ..Default::default()
        },
    );

    let mut view = render_route_map(&data, Point::new(1024.0, 768.0))?;

    println!("✅ Scene built:");
    println!(
        "   Route length: {:.1} km, {} checkpoints",
        routemap::route::checkpoints::path_length_km(&data.path()),
        data.checkpoints.len()
    );
    println!(
        "   Center: {:.4}, {:.4} at zoom {}",
        view.map.viewport().center.lat,
        view.map.viewport().center.lng,
        view.map.viewport().zoom
    );
    println!("   Layers ({}):", view.map.layers().len());
    view.map.layers().for_each_layer(|layer| {
        println!(
            "      [{:>2}] {} ({}) - {}",
            layer.z_index(),
            layer.id(),
            layer.kind(),
            layer.name()
        );
    });

    // Popups as the hosting renderer would show them
    println!("\n💬 Popup contents:");
    view.map.layers().for_each_layer(|layer| {
        if let Some(marker) = layer.as_any().downcast_ref::<Marker>() {
            if let Some(popup) = marker.popup() {
                println!("   {} -> {}", marker.id(), popup.to_html());
            }
        }
    });

    // Tile URLs the renderer would fetch for the fitted view
    if let Some(tile_layer) = view.map.get_layer("base") {
        if let Some(tiles) = tile_layer.as_any().downcast_ref::<TileLayer>() {
            let zoom = view.map.viewport().zoom as u8;
            println!("\n🧩 Sample tile URL at zoom {}:", zoom);
            println!("   {}", tiles.tile_url(zoom, 0, 0));
        }
    }

    // Wander off, then use the recenter control
    println!("\n🚀 Wandering and recentering:");
    view.map.set_view(LatLng::new(51.5074, -0.1278), 12.0);
    println!(
        "   Moved to London: {:.4}, {:.4}",
        view.map.viewport().center.lat,
        view.map.viewport().center.lng
    );
    view.recenter()?;
    println!(
        "   Back on the route: {:.4}, {:.4} at zoom {}",
        view.map.viewport().center.lat,
        view.map.viewport().center.lng,
        view.map.viewport().zoom
    );

    // GeoJSON export for other consumers
    let geojson = route_to_geojson(&data);
    println!(
        "\n📦 GeoJSON export: {} features",
        geojson.features().len()
    );

    println!("\n✅ Demo completed");
    Ok(())
}
