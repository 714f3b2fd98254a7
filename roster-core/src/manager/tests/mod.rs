use super::*;


fn create_test_manager() -> EmployeeManager {
    EmployeeManager::with_parts(MemoryHistory::default(), ToastQueue::default())
}

fn create_manager_at(location: &str) -> EmployeeManager {
    EmployeeManager::with_parts(MemoryHistory::new(location), ToastQueue::default())
}

fn fill_form(manager: &mut EmployeeManager, name: &str, address: &str) {
    let fields = [
        (Field::Name, name.to_string()),
        (Field::DateOfBirth, "1992-04-18".to_string()),
        (Field::Email, format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
        (Field::Address, address.to_string()),
    ];
    for (field, value) in fields {
        assert_eq!(
            manager.dispatch(Action::FieldChanged(field, value)),
            Outcome::Applied
        );
    }
}

// ========================================================================
// Helper: add an employee through the form
// ========================================================================

fn add_employee(manager: &mut EmployeeManager, name: &str, address: &str) -> EmployeeId {
    assert_eq!(manager.dispatch(Action::OpenAdd), Outcome::Applied);
    fill_form(manager, name, address);
    match manager.dispatch(Action::Submit) {
        Outcome::Added(id) => id,
        other => panic!("expected Added, got {other:?}"),
    }
}

fn toast_messages(manager: &EmployeeManager) -> Vec<String> {
    manager
        .notifier()
        .iter()
        .map(|t| t.payload.message.clone())
        .collect()
}
