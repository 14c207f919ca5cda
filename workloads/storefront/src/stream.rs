//! Shell-first delivery of one page.

use std::fmt::Display;
use std::future::Future;

use fragrance_streaming::{Shell, StreamError, StreamingSink};
use fragrance_ui::{SectionId, StorefrontView};
use futures::Sink;
use tracing::{debug, info};

/// Stream the page for a freshly mounted view.
///
/// The shell and every section go out first, with the catalog in its pending
/// state. Only then is `load` driven, since a host transport may block while
/// it waits for the backend. Once the load settles, each section with a
/// replace target is streamed again as a deferred replacement and the
/// document is closed.
pub async fn stream_page<S, E, F>(
    sink: &mut StreamingSink<S, E>,
    view: &mut StorefrontView,
    load: F,
) -> Result<(), StreamError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
    F: Future<Output = ()>,
{
    let shell = view.shell();

    stream_initial(sink, view, &shell).await?;
    load.await;

    view.poll_updates();
    info!(
        mount = %view.mount_id(),
        state = view.state().name(),
        products = view.state().products().len(),
        "catalog settled"
    );

    for section in SectionId::ALL {
        if let Some(target) = section.replace_target() {
            sink.send_deferred(target, &view.render_section(section))
                .await?;
        }
    }
    sink.finish(&shell.render_closing()).await?;

    debug!(bytes = sink.bytes_sent(), "page streamed");
    Ok(())
}

async fn stream_initial<S, E>(
    sink: &mut StreamingSink<S, E>,
    view: &StorefrontView,
    shell: &Shell,
) -> Result<(), StreamError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    sink.send_shell(&shell.render_opening()).await?;
    for section in SectionId::ALL {
        sink.send_section(section.name(), &view.render_section(section))
            .await?;
    }
    Ok(())
}
