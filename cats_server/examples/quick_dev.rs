use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let hc = httpc_test::new_client("http://localhost:3000")?;

    let res = hc
        .do_post(
            "/cats",
            json!({
                "name": "Tom",
                "age": 3
            }),
        )
        .await?;
    res.print().await?;

    let id = res.json_value::<String>("/newCat/id")?;

    hc.do_get("/cats").await?.print().await?;

    hc.do_delete(&format!("/cats/{id}")).await?.print().await?;
    // Second delete answers 404.
    hc.do_delete(&format!("/cats/{id}")).await?.print().await?;

    Ok(())
}
