use super::*;

/// Tests posting messages and reading them back in order.
///
/// Expected: Ok with messages in insertion order and their authors attached
#[tokio::test]
async fn lists_messages_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let group = factory::group::GroupFactory::new(db)
        .admin(admin.id)
        .member(member.id)
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    repo.add_message(
        group.id,
        admin.id,
        MessageParam {
            content: "Welcome".to_string(),
        },
    )
    .await?;
    repo.add_message(
        group.id,
        member.id,
        MessageParam {
            content: "Thanks".to_string(),
        },
    )
    .await?;

    let detail = repo.get_detail(group.id).await?.unwrap();
    let contents: Vec<&str> = detail
        .messages
        .iter()
        .map(|m| m.message.content.as_str())
        .collect();
    assert_eq!(contents, vec!["Welcome", "Thanks"]);
    assert_eq!(detail.messages[1].author.id, member.id);

    Ok(())
}

/// Tests that deleting a group removes its messages.
///
/// Expected: Ok with no messages left
#[tokio::test]
async fn delete_cascades_to_messages() -> Result<(), DbErr> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let group = factory::create_group(db, admin.id).await?;
    factory::group::create_message(db, group.id, admin.id, "bye").await?;

    let repo = GroupRepository::new(db);
    repo.delete(group.id).await?;

    assert!(repo.find_by_id(group.id).await?.is_none());
    assert!(entity::prelude::Message::find().all(db).await?.is_empty());
    assert!(entity::prelude::GroupAdmin::find().all(db).await?.is_empty());

    Ok(())
}
