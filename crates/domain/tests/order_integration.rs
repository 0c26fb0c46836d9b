//! Integration tests for the order commands.
//!
//! These tests drive the commands through `ModelManager` and check that the
//! client list and the order list stay consistent after every step.

use domain::{
    AddOrderCommand, Address, BookKeeper, Client, Command, CommandError, Deadline,
    DeleteOrderCommand, EditOrderCommand, EditOrderDescriptor, Email, Index, Model,
    ModelManager, Name, Order, OrderDate, OrderId, Phone, Price, Remark, Status,
};

fn client(name: &str) -> Client {
    Client::new(
        Name::parse(name).unwrap(),
        Phone::parse("94351253").unwrap(),
        Email::parse("someone@example.com").unwrap(),
        Address::parse("123, Jurong West Ave 6").unwrap(),
        Default::default(),
    )
}

fn order(remark: &str, price: &str, deadline: &str) -> Order {
    Order::new(
        OrderId::new(),
        OrderDate::parse("01-07-2024 09:30").unwrap(),
        Deadline::parse(deadline).unwrap(),
        Price::parse(price).unwrap(),
        Remark::parse(remark).unwrap(),
        Status::Pending,
    )
}

fn model_with(clients: Vec<Client>) -> ModelManager {
    ModelManager::new(BookKeeper::from_clients(clients).unwrap())
}

fn first() -> Index {
    Index::from_one_based(1).unwrap()
}

/// Every order in the global list is held by exactly the client it points to.
fn assert_consistent(model: &ModelManager) {
    let book = model.book_keeper();
    let flattened: Vec<&Order> = book.clients().iter().flat_map(|c| c.orders()).collect();
    let listed: Vec<&Order> = book.orders().collect();
    assert_eq!(flattened, listed);

    for order in listed {
        let owner = book.client_of(order).expect("order has an owner");
        assert!(owner.orders().contains(order));
    }
}

mod add_order {
    use super::*;

    #[test]
    fn adds_order_to_client_without_orders() {
        let mut model = model_with(vec![client("Alice")]);
        let roses = order("1xRoses", "40", "23-07-2024 00:00");

        let result = AddOrderCommand::new(first(), roses.clone())
            .execute(&mut model)
            .unwrap();

        assert!(result.feedback_to_user.contains("Alice"));
        let alice = &model.book_keeper().clients()[0];
        assert_eq!(alice.orders().len(), 1);
        let stored = &alice.orders()[0];
        assert_eq!(stored.remark().as_str(), "1xRoses");
        assert_eq!(stored.price().cents(), 4000);
        assert_eq!(stored.deadline().to_string(), "23-07-2024 00:00");
        assert_consistent(&model);
    }

    #[test]
    fn new_order_appears_in_order_list_exactly_once() {
        let existing = order("Tulips", "10", "01-08-2024 10:00");
        let mut model = model_with(vec![
            client("Alice").add_order(existing).unwrap(),
            client("Bob"),
        ]);
        let roses = order("Roses", "40", "23-07-2024 00:00");

        AddOrderCommand::new(first(), roses.clone())
            .execute(&mut model)
            .unwrap();

        let matching = model
            .filtered_order_list()
            .into_iter()
            .filter(|o| o.order_id() == roses.order_id())
            .count();
        assert_eq!(matching, 1);
        assert_eq!(model.filtered_order_list().len(), 2);
        assert_consistent(&model);
    }

    #[test]
    fn same_order_twice_is_rejected_without_change() {
        let mut model = model_with(vec![client("Alice")]);
        let roses = order("Roses", "40", "23-07-2024 00:00");
        let command = AddOrderCommand::new(first(), roses.clone());
        command.execute(&mut model).unwrap();
        let before = model.book_keeper().clone();

        let err = command.execute(&mut model).unwrap_err();

        assert!(matches!(err, CommandError::Model(_)));
        assert_eq!(model.book_keeper(), &before);
    }
}

mod edit_order {
    use super::*;

    fn model_with_roses() -> (ModelManager, OrderId) {
        let roses = order("Roses", "40", "23-07-2024 00:00");
        let id = roses.order_id();
        let alice = client("Alice").add_order(roses).unwrap();
        (model_with(vec![client("Bob"), alice]), id)
    }

    #[test]
    fn edits_price_and_keeps_the_rest() {
        let (mut model, id) = model_with_roses();
        let before = model.book_keeper().find_order(id).unwrap().1.clone();
        let descriptor = EditOrderDescriptor::new().with_price(Price::parse("60").unwrap());

        let result = EditOrderCommand::new(first(), descriptor)
            .execute(&mut model)
            .unwrap();

        let (owner, after) = model.book_keeper().find_order(id).unwrap();
        assert_eq!(owner.name().as_str(), "Alice");
        assert_eq!(after.price().cents(), 6000);
        assert_eq!(after.remark(), before.remark());
        assert_eq!(after.deadline(), before.deadline());
        assert_eq!(after.order_date(), before.order_date());
        assert_eq!(after.status(), before.status());
        assert_eq!(after.client_id(), before.client_id());
        assert!(result.feedback_to_user.starts_with("Edited Order: "));
        assert_consistent(&model);
    }

    #[test]
    fn overwrites_exactly_the_present_fields() {
        let (mut model, id) = model_with_roses();
        let before = model.book_keeper().find_order(id).unwrap().1.clone();
        let descriptor = EditOrderDescriptor::new()
            .with_status(Status::Completed)
            .with_deadline(Deadline::parse("30-07-2024 18:00").unwrap());

        EditOrderCommand::new(first(), descriptor)
            .execute(&mut model)
            .unwrap();

        let after = model.book_keeper().find_order(id).unwrap().1;
        assert_eq!(after.order_id(), id);
        assert_eq!(after.status(), Status::Completed);
        assert_eq!(after.deadline().to_string(), "30-07-2024 18:00");
        assert_eq!(after.price(), before.price());
        assert_eq!(after.remark(), before.remark());
    }

    #[test]
    fn repeated_edit_gives_the_same_order() {
        let (mut model, id) = model_with_roses();
        let command = EditOrderCommand::new(
            first(),
            EditOrderDescriptor::new().with_price(Price::parse("60").unwrap()),
        );

        command.execute(&mut model).unwrap();
        let once = model.book_keeper().find_order(id).unwrap().1.clone();
        command.execute(&mut model).unwrap();
        let twice = model.book_keeper().find_order(id).unwrap().1.clone();

        assert_eq!(once, twice);
    }

    #[test]
    fn out_of_range_index_leaves_model_unchanged() {
        let (mut model, _) = model_with_roses();
        let before = model.book_keeper().clone();

        let err = EditOrderCommand::new(
            Index::from_one_based(2).unwrap(),
            EditOrderDescriptor::new().with_price(Price::parse("60").unwrap()),
        )
        .execute(&mut model)
        .unwrap_err();

        assert_eq!(err, CommandError::InvalidOrderIndex);
        assert_eq!(err.to_string(), "The order index provided is invalid");
        assert_eq!(model.book_keeper(), &before);
    }

    #[test]
    fn index_is_resolved_against_filtered_orders() {
        let first_order = order("Roses", "40", "23-07-2024 00:00");
        let second_order = order("Lilies", "25", "24-07-2024 00:00")
            .with_changes(None, None, None, None, Some(Status::Completed));
        let lilies_id = second_order.order_id();
        let alice = client("Alice")
            .add_order(first_order)
            .unwrap()
            .add_order(second_order)
            .unwrap();
        let mut model = model_with(vec![alice]);
        model.update_filtered_order_list(domain::predicate::status_is(Status::Completed));

        EditOrderCommand::new(
            first(),
            EditOrderDescriptor::new().with_remark(Remark::parse("2xLilies").unwrap()),
        )
        .execute(&mut model)
        .unwrap();

        let lilies = model.book_keeper().find_order(lilies_id).unwrap().1;
        assert_eq!(lilies.remark().as_str(), "2xLilies");
        // the filter is reset after a successful edit
        assert_eq!(model.filtered_order_list().len(), 2);
    }
}

mod delete_order {
    use super::*;

    #[test]
    fn deletes_from_client_and_order_list() {
        let roses = order("Roses", "40", "23-07-2024 00:00");
        let id = roses.order_id();
        let mut model = model_with(vec![client("Alice").add_order(roses).unwrap()]);

        let result = DeleteOrderCommand::new(id).execute(&mut model).unwrap();

        assert!(result.feedback_to_user.starts_with("Deleted Order: "));
        assert!(model.book_keeper().clients()[0].orders().is_empty());
        assert!(model.filtered_order_list().is_empty());
        assert_consistent(&model);
    }

    #[test]
    fn finds_order_outside_the_filtered_view() {
        let roses = order("Roses", "40", "23-07-2024 00:00");
        let id = roses.order_id();
        let mut model = model_with(vec![client("Alice").add_order(roses).unwrap()]);
        model.update_filtered_client_list(domain::predicate::name_contains_keywords(vec![
            "nobody".to_string(),
        ]));

        DeleteOrderCommand::new(id).execute(&mut model).unwrap();

        assert_eq!(model.book_keeper().order_count(), 0);
    }

    #[test]
    fn unknown_id_leaves_model_unchanged() {
        let mut model = model_with(vec![
            client("Alice")
                .add_order(order("Roses", "40", "23-07-2024 00:00"))
                .unwrap(),
        ]);
        let before = model.book_keeper().clone();

        let err = DeleteOrderCommand::new(OrderId::new())
            .execute(&mut model)
            .unwrap_err();

        assert_eq!(err, CommandError::InvalidOrderId);
        assert_eq!(model.book_keeper(), &before);
    }
}

mod lifecycle {
    use super::*;

    #[test]
    fn add_edit_delete_across_clients() {
        let mut model = model_with(vec![client("Alice"), client("Bob")]);

        let roses = order("Roses", "40", "23-07-2024 00:00");
        let tulips = order("Tulips", "15", "25-07-2024 00:00");
        AddOrderCommand::new(first(), roses.clone())
            .execute(&mut model)
            .unwrap();
        AddOrderCommand::new(Index::from_one_based(2).unwrap(), tulips.clone())
            .execute(&mut model)
            .unwrap();
        assert_eq!(model.filtered_order_list().len(), 2);

        EditOrderCommand::new(
            Index::from_one_based(2).unwrap(),
            EditOrderDescriptor::new().with_status(Status::Completed),
        )
        .execute(&mut model)
        .unwrap();
        let (owner, edited) = model.book_keeper().find_order(tulips.order_id()).unwrap();
        assert_eq!(owner.name().as_str(), "Bob");
        assert_eq!(edited.status(), Status::Completed);

        DeleteOrderCommand::new(roses.order_id())
            .execute(&mut model)
            .unwrap();
        let remaining: Vec<_> = model
            .filtered_order_list()
            .into_iter()
            .map(|o| o.order_id())
            .collect();
        assert_eq!(remaining, vec![tulips.order_id()]);
        assert_consistent(&model);
    }
}
