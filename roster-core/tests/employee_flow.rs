//! End-to-end employee lifecycle through the public manager API

use roster_core::{
    Action, Config, Dialog, EmployeeManager, Field, FormMode, History, MemoryHistory, Notifier,
    Outcome, PageLimit,
};
use shared::NotificationPayload;
use shared::models::Gender;

/// Notifier that only records what it was given
#[derive(Default)]
struct Recorder(Vec<NotificationPayload>);

impl Notifier for Recorder {
    fn notify(&mut self, payload: NotificationPayload) {
        self.0.push(payload);
    }
}

fn set(manager: &mut EmployeeManager<MemoryHistory, Recorder>, field: Field, value: &str) {
    manager.dispatch(Action::FieldChanged(field, value.to_string()));
}

#[test]
fn test_add_edit_delete_lifecycle() {
    let mut manager = EmployeeManager::with_parts(MemoryHistory::default(), Recorder::default());
    assert_eq!(manager.total(), 0);
    assert!(manager.page().is_empty());

    // add
    manager.dispatch(Action::OpenAdd);
    assert_eq!(manager.active_dialog(), Some(Dialog::Form(FormMode::Adding)));
    set(&mut manager, Field::Name, "Nguyen Van A");
    set(&mut manager, Field::DateOfBirth, "1990-01-01");
    set(&mut manager, Field::Email, "a@example.com");
    set(&mut manager, Field::Address, "Ha Noi");
    let Outcome::Added(id) = manager.dispatch(Action::Submit) else {
        panic!("valid draft should be added");
    };

    let page = manager.page();
    assert_eq!(page.page, 1);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, id);
    assert_eq!(page.data[0].gender, Gender::Male);

    // edit
    manager.dispatch(Action::OpenEdit(id));
    set(&mut manager, Field::Address, "Ho Chi Minh");
    assert_eq!(manager.dispatch(Action::Submit), Outcome::Updated(id));
    assert_eq!(manager.page().data[0].address, "Ho Chi Minh");

    // delete
    assert_eq!(manager.dispatch(Action::RequestDelete(id)), Outcome::Applied);
    assert_eq!(manager.dispatch(Action::ConfirmDelete), Outcome::Deleted(id));
    assert_eq!(manager.total(), 0);
    assert!(manager.page().is_empty());
    assert_eq!(manager.active_dialog(), None);

    let messages: Vec<&str> = manager
        .notifier()
        .0
        .iter()
        .map(|n| n.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Employee added successfully!",
            "Employee updated successfully!",
            "Employee deleted successfully!",
        ]
    );
}

#[test]
fn test_location_round_trip() {
    let config = Config::default().with_location("/management-employee?page=2&limit=10&tab=all");
    let mut manager = EmployeeManager::new(&config);
    assert_eq!(manager.view().page(), 2);
    assert_eq!(manager.limit(), PageLimit::Ten);

    manager.dispatch(Action::SetPage(3));
    assert_eq!(
        manager.location(),
        "/management-employee?page=3&limit=10&tab=all"
    );
    assert_eq!(manager.history().entries().len(), 2);

    let config = Config::default().with_location("/management-employee?page=abc&limit=7");
    let manager = EmployeeManager::new(&config);
    assert_eq!(manager.view().page(), 1);
    assert_eq!(manager.limit(), PageLimit::Five);
    assert_eq!(manager.history().location(), config.location);
}
