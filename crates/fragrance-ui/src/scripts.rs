//! Browser-side behavior.

/// Menu toggle. Mirrors `render_menu`: flips `data-open`, `aria-hidden` and the
/// backdrop's `hidden` attribute. Clicks inside the drawer do not close it.
pub const MENU_SCRIPT: &str = r#"<script>
(function () {
    var menu = document.getElementById('mobile-menu');
    if (!menu) return;
    var backdrop = menu.querySelector('.menu-backdrop');

    function setOpen(open) {
        menu.dataset.open = String(open);
        menu.setAttribute('aria-hidden', String(!open));
        if (backdrop) backdrop.hidden = !open;
    }

    document.addEventListener('click', function (e) {
        var control = e.target.closest('[data-action]');
        if (!control) return;
        if (control.dataset.action === 'open-menu') setOpen(true);
        if (control.dataset.action === 'close-menu') setOpen(false);
    });
})();
</script>"#;
