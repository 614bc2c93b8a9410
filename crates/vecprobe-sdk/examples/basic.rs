use vecprobe_core::{sample_points, ProbeConfig};
use vecprobe_sdk::{Client, ClientConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Connect
    let cfg = ProbeConfig::from_env()?;
    let client = Client::connect(ClientConfig::from(&cfg))?;
    let info = client.health_check().await?;
    println!("Connected to {} ({})", info.title, info.version);

    // 2. Create Collection
    let spec = cfg.collection_spec()?;
    match client.delete_collection(spec.name()).await {
        Ok(_) => {}
        Err(e) if e.is_not_found() => {}
        Err(e) => return Err(e.into()),
    }
    client.create_collection(&spec).await?;
    println!("Created collection: {}", spec.name());

    // 3. Insert Points
    let points = sample_points();
    client.upsert_points(spec.name(), &points, true).await?;
    println!("Inserted {} points.", points.len());

    // 4. Read them back
    let ids: Vec<u64> = points.iter().map(|p| p.id).collect();
    for point in client.get_points(spec.name(), &ids).await? {
        println!("  ID: {}, city: {}", point.id, point.payload.get("city").map_or("-", String::as_str));
    }

    // 5. Cleanup
    client.delete_collection(spec.name()).await?;
    println!("Deleted collection.");

    Ok(())
}
