use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

/// Page frame around the forecast view
#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="App">
            <header class="App-header">
                { for props.children.iter() }
            </header>
        </div>
    }
}
