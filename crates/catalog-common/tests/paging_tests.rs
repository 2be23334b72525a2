use catalog_common::paging::page_of;

#[test]
fn first_page_of_a_full_list() {
    let window = page_of(100, 1, 24);
    assert_eq!(window.page, 1);
    assert_eq!(window.total_pages, 5);
    assert_eq!((window.start, window.end), (0, 24));
}

#[test]
fn last_page_is_partial() {
    let window = page_of(100, 5, 24);
    assert_eq!((window.start, window.end), (96, 100));
}

#[test]
fn exact_multiple_has_no_phantom_page() {
    let window = page_of(48, 2, 24);
    assert_eq!(window.total_pages, 2);
    assert_eq!((window.start, window.end), (24, 48));
}

#[test]
fn out_of_range_page_clamps_to_last() {
    let window = page_of(30, 99, 24);
    assert_eq!(window.page, 2);
    assert_eq!((window.start, window.end), (24, 30));
}

#[test]
fn page_zero_clamps_to_first() {
    let window = page_of(30, 0, 24);
    assert_eq!(window.page, 1);
    assert_eq!(window.start, 0);
}

#[test]
fn empty_list_yields_one_empty_page() {
    let window = page_of(0, 3, 24);
    assert_eq!(window.page, 1);
    assert_eq!(window.total_pages, 1);
    assert_eq!((window.start, window.end), (0, 0));
}
